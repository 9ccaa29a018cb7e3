pub mod frame;
pub(crate) mod points_file;
pub(crate) mod table;
