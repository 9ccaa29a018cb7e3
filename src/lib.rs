//! Client for the Embrapa SATVeg API: NDVI and EVI vegetation index time
//! series for any coordinate covered by the MODIS sensors, delivered as
//! [polars](https://pola.rs) DataFrames.
//!
//! # Quick start
//!
//! ```no_run
//! use satveg::{LatLon, Point, Satveg, SatvegError};
//!
//! fn main() -> Result<(), SatvegError> {
//!     let client = Satveg::builder().token("MY-API-TOKEN").build()?;
//!
//!     let series = client.series(&[
//!         Point::labeled(LatLon(-15.079, -48.958), "soybean"),
//!         Point::new(LatLon(-22.655, -47.168)),
//!     ])?;
//!     println!("{}", series.frame);
//!
//!     let learn = series.to_learn()?;
//!     println!("{}", learn.frame);
//!     Ok(())
//! }
//! ```
//!
//! Requests need an API token, issued for free through the
//! [Embrapa AgroAPI portal](https://www.agroapi.cnptia.embrapa.br/portal/).

#![forbid(unsafe_code)]

mod error;
mod satveg;
mod series;
mod types;

pub use error::SatvegError;
pub use satveg::*;

pub use series::frame::{LearnFrame, SeriesFrame};

pub use types::lookup::{Lookup, SeriesData};
pub use types::options::{Filter, PreFilter, Profile, Satellite};
pub use types::point::{LatLon, Point};
