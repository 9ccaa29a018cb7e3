//! Wrappers around the DataFrames produced by this crate.
//!
//! [`SeriesFrame`] is the wide per-point table returned by a batch request;
//! [`LearnFrame`] is the compacted, training-ready variant derived from it.

use crate::error::SatvegError;
use crate::series::table::BASE_COLUMNS;
use polars::prelude::*;

/// A wrapper around a [`DataFrame`] holding one row per requested point.
///
/// The first columns echo the request and its outcome (`label` when any
/// point was labeled, `latitude`, `longitude`, `success`, `status_code`,
/// `message`); after those comes one `Float64` column per observation date,
/// named `YYYY-MM-DD`. Failed rows are null in every date column.
///
/// The inner frame is public, so the full polars API stays available for
/// anything this wrapper does not cover.
#[derive(Clone)]
pub struct SeriesFrame {
    /// The underlying DataFrame.
    pub frame: DataFrame,
}

impl SeriesFrame {
    pub(crate) fn new(frame: DataFrame) -> Self {
        SeriesFrame { frame }
    }

    /// Returns a new `SeriesFrame` keeping only the rows whose lookup
    /// succeeded.
    ///
    /// # Returns
    ///
    /// A `Result` containing a new `SeriesFrame` with the filtered frame,
    /// or a `SatvegError` if the filtering fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{LatLon, Point, Satveg, SatvegError};
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder().token("MY-TOKEN").build()?;
    ///     let series = client.series(&[Point::new(LatLon(-15.079, -48.958))])?;
    ///     let valid = series.successful()?;
    ///     println!("{}", valid.frame);
    ///     Ok(())
    /// }
    /// ```
    pub fn successful(&self) -> Result<SeriesFrame, SatvegError> {
        if self.frame.is_empty() {
            return Ok(self.clone());
        }
        let mask = self.frame.column("success")?.bool()?;
        Ok(SeriesFrame::new(self.frame.filter(mask)?))
    }

    /// Compacts the successful rows into a table ready for machine learning.
    ///
    /// The header is taken from the first successful row: the dates it has
    /// readings for, in column order. Every row then contributes its own
    /// readings positionally under that header, so rows observed on
    /// different calendars line up by position rather than by date. Rows
    /// with fewer readings than the header are padded with nulls, rows with
    /// more are truncated. When the source table has a `label` column it is
    /// carried over as the first column.
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`LearnFrame`], or
    /// [`SatvegError::NoValidSeries`] when no row holds a valid series.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{LatLon, Point, Satveg, SatvegError};
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder().token("MY-TOKEN").build()?;
    ///     let series = client.series(&[
    ///         Point::labeled(LatLon(-15.079, -48.958), "soybean"),
    ///         Point::labeled(LatLon(-22.655, -47.168), "sugarcane"),
    ///     ])?;
    ///     let learn = series.to_learn()?;
    ///     println!("{}", learn.frame);
    ///     Ok(())
    /// }
    /// ```
    pub fn to_learn(&self) -> Result<LearnFrame, SatvegError> {
        let valid = self.successful()?.frame;
        if valid.height() == 0 {
            return Err(SatvegError::NoValidSeries);
        }

        let date_columns: Vec<String> = valid
            .get_column_names()
            .iter()
            .filter(|name| !BASE_COLUMNS.contains(&name.as_str()))
            .map(|name| name.to_string())
            .collect();

        let mut observed = Vec::with_capacity(date_columns.len());
        for name in &date_columns {
            observed.push((name.as_str(), valid.column(name)?.f64()?.clone()));
        }

        let header: Vec<&str> = observed
            .iter()
            .filter(|(_, column)| column.get(0).is_some())
            .map(|(name, _)| *name)
            .collect();

        let mut cells: Vec<Vec<Option<f64>>> = vec![Vec::new(); header.len()];
        for row in 0..valid.height() {
            let readings: Vec<f64> = observed
                .iter()
                .filter_map(|(_, column)| column.get(row))
                .collect();
            for (slot, cell) in cells.iter_mut().enumerate() {
                cell.push(readings.get(slot).copied());
            }
        }

        let mut columns = Vec::with_capacity(header.len() + 1);
        if let Ok(label) = valid.column("label") {
            columns.push(label.clone());
        }
        for (name, cell) in header.iter().zip(cells) {
            columns.push(Column::new((*name).into(), cell));
        }

        Ok(LearnFrame {
            frame: DataFrame::new(columns)?,
        })
    }
}

/// A wrapper around a [`DataFrame`] shaped for training: an optional `label`
/// column followed by one `Float64` column per reading of the first series.
///
/// Produced by [`SeriesFrame::to_learn`].
#[derive(Clone)]
pub struct LearnFrame {
    /// The underlying DataFrame.
    pub frame: DataFrame,
}
