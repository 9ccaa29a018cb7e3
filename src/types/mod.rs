pub mod lookup;
pub mod options;
pub mod point;
