//! The outcome of a single series request.
//!
//! Transport failures and authentication problems are ordinary values here,
//! not errors, so a batch of lookups can record what happened per coordinate
//! and keep going.

use serde::Deserialize;

/// The series payload returned by the service for one coordinate.
///
/// Values and dates are parallel lists: `values[i]` is the index reading for
/// `dates[i]`. Dates are formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeriesData {
    /// The vegetation index readings, oldest first.
    #[serde(default, rename = "listaSerie")]
    pub values: Vec<f64>,
    /// The observation dates, parallel to `values`.
    #[serde(default, rename = "listaDatas")]
    pub dates: Vec<String>,
}

/// What happened when a series was requested for one coordinate.
///
/// `success` is `true` only when the service answered with a parseable
/// series; in every other case `status_code` and `message` say what went
/// wrong and `series` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    /// Whether a series was obtained.
    pub success: bool,
    /// The HTTP status of the exchange; `408` when the service could not be
    /// reached at all.
    pub status_code: u16,
    /// Short description of the outcome.
    pub message: String,
    /// The series payload, present only on success.
    pub series: Option<SeriesData>,
}

impl Lookup {
    pub(crate) fn success(series: SeriesData) -> Self {
        Lookup {
            success: true,
            status_code: 200,
            message: String::from("success"),
            series: Some(series),
        }
    }

    pub(crate) fn connection_error() -> Self {
        Lookup {
            success: false,
            status_code: 408,
            message: String::from("connection error"),
            series: None,
        }
    }

    pub(crate) fn invalid_credentials() -> Self {
        Lookup {
            success: false,
            status_code: 401,
            message: String::from("invalid credentials"),
            series: None,
        }
    }

    pub(crate) fn not_processed(status_code: u16) -> Self {
        Lookup {
            success: false,
            status_code,
            message: String::from("request could not be processed"),
            series: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_series_payload() {
        let body = r#"{
            "listaSerie": [0.35, 0.41, 0.52],
            "listaDatas": ["2020-01-01", "2020-01-17", "2020-02-02"]
        }"#;

        let series: SeriesData = serde_json::from_str(body).unwrap();
        assert_eq!(series.values, vec![0.35, 0.41, 0.52]);
        assert_eq!(
            series.dates,
            vec!["2020-01-01", "2020-01-17", "2020-02-02"]
        );
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let series: SeriesData = serde_json::from_str("{}").unwrap();
        assert!(series.values.is_empty());
        assert!(series.dates.is_empty());
    }

    #[test]
    fn test_unknown_payload_keys_are_ignored() {
        let body = r#"{"listaSerie": [0.1], "listaDatas": ["2020-01-01"], "extra": 7}"#;
        let series: SeriesData = serde_json::from_str(body).unwrap();
        assert_eq!(series.values, vec![0.1]);
    }

    #[test]
    fn test_outcome_constructors_fill_the_envelope() {
        let success = Lookup::success(SeriesData::default());
        assert!(success.success);
        assert_eq!(success.status_code, 200);
        assert_eq!(success.message, "success");
        assert!(success.series.is_some());

        let connection = Lookup::connection_error();
        assert!(!connection.success);
        assert_eq!(connection.status_code, 408);
        assert_eq!(connection.message, "connection error");
        assert!(connection.series.is_none());

        let credentials = Lookup::invalid_credentials();
        assert_eq!(credentials.status_code, 401);
        assert_eq!(credentials.message, "invalid credentials");

        let other = Lookup::not_processed(500);
        assert_eq!(other.status_code, 500);
        assert_eq!(other.message, "request could not be processed");
        assert!(other.series.is_none());
    }
}
