use crate::types::options::Filter;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by this crate.
///
/// Note that an unreachable service, a rejected token or a failing HTTP
/// status are not errors: those outcomes are recorded per coordinate in a
/// [`Lookup`](crate::Lookup) so a batch of requests can run to completion.
#[derive(Debug, Error)]
pub enum SatvegError {
    #[error("Invalid {filter} filter parameter {parameter}, the service accepts {allowed}")]
    InvalidFilterParameter {
        filter: Filter,
        parameter: u8,
        allowed: &'static str,
    },

    #[error("Failed to build the HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed to parse the series payload returned by the service")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Failed to read points file '{0}'")]
    PointsFileRead(PathBuf, #[source] PolarsError),

    #[error("Points file '{path}' has no '{column}' column")]
    MissingPointsColumn {
        path: PathBuf,
        column: &'static str,
    },

    #[error("Points file '{path}' row {row} has no numeric value in column '{column}'")]
    InvalidPointsCoordinate {
        path: PathBuf,
        column: &'static str,
        row: usize,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("None of the requested series contain valid data")]
    NoValidSeries,
}
