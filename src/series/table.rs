//! Assembles per-point lookups into a single wide DataFrame.
//!
//! Each lookup becomes one row. The first columns echo the request and its
//! outcome; after those, one `Float64` column per observation date holds the
//! index readings. Rows without a series (failed lookups) are null-filled in
//! every date column, and rows whose series lack a date another row has are
//! null-filled in that date's column.

use crate::error::SatvegError;
use crate::types::lookup::Lookup;
use crate::types::point::Point;
use polars::prelude::*;

/// Columns that precede the per-date value columns, in order. `label` is
/// present only when at least one requested point carries a label.
pub(crate) const BASE_COLUMNS: [&str; 6] = [
    "label",
    "latitude",
    "longitude",
    "success",
    "status_code",
    "message",
];

/// Builds the one-row frame for a single lookup. Only successful lookups
/// contribute date columns; the diagonal concat in [`build_series_frame`]
/// aligns rows with differing dates and null-fills the gaps.
fn row_frame(
    point: &Point,
    lookup: &Lookup,
    include_label: bool,
) -> Result<DataFrame, SatvegError> {
    let mut columns = Vec::new();
    if include_label {
        columns.push(Column::new("label".into(), [point.label.as_deref()]));
    }
    columns.push(Column::new("latitude".into(), [point.location.0]));
    columns.push(Column::new("longitude".into(), [point.location.1]));
    columns.push(Column::new("success".into(), [lookup.success]));
    columns.push(Column::new("status_code".into(), [lookup.status_code as u32]));
    columns.push(Column::new("message".into(), [lookup.message.as_str()]));

    if let Some(series) = &lookup.series {
        for (index, date) in series.dates.iter().enumerate() {
            columns.push(Column::new(
                date.as_str().into(),
                [series.values.get(index).copied()],
            ));
        }
    }

    Ok(DataFrame::new(columns)?)
}

/// Stacks one row per point, in request order. Date columns are the union of
/// all observed dates, ordered by first appearance.
pub(crate) fn build_series_frame(
    points: &[Point],
    lookups: &[Lookup],
) -> Result<DataFrame, SatvegError> {
    if points.is_empty() {
        return Ok(DataFrame::empty());
    }

    let include_label = points.iter().any(|point| point.label.is_some());
    let rows = points
        .iter()
        .zip(lookups)
        .map(|(point, lookup)| row_frame(point, lookup, include_label))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(polars::functions::concat_df_diagonal(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::lookup::SeriesData;
    use crate::types::point::LatLon;

    fn series(values: &[f64], dates: &[&str]) -> SeriesData {
        SeriesData {
            values: values.to_vec(),
            dates: dates.iter().map(|date| date.to_string()).collect(),
        }
    }

    fn names(frame: &DataFrame) -> Vec<&str> {
        frame
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect()
    }

    #[test]
    fn test_lookups_become_rows_in_request_order() {
        let points = [
            Point::labeled(LatLon(-15.0, -48.0), "soybean"),
            Point::new(LatLon(-22.0, -47.0)),
        ];
        let lookups = [
            Lookup::success(series(&[0.35, 0.41], &["2020-01-01", "2020-01-17"])),
            Lookup::not_processed(500),
        ];

        let frame = build_series_frame(&points, &lookups).unwrap();
        assert_eq!(frame.height(), 2);
        assert_eq!(
            names(&frame),
            [
                "label",
                "latitude",
                "longitude",
                "success",
                "status_code",
                "message",
                "2020-01-01",
                "2020-01-17",
            ]
        );

        let labels = frame.column("label").unwrap().str().unwrap();
        assert_eq!(labels.get(0), Some("soybean"));
        assert_eq!(labels.get(1), None);

        let success = frame.column("success").unwrap().bool().unwrap();
        assert_eq!(success.get(0), Some(true));
        assert_eq!(success.get(1), Some(false));

        let status = frame.column("status_code").unwrap().u32().unwrap();
        assert_eq!(status.get(0), Some(200));
        assert_eq!(status.get(1), Some(500));

        let first_date = frame.column("2020-01-01").unwrap().f64().unwrap();
        assert_eq!(first_date.get(0), Some(0.35));
        assert_eq!(first_date.get(1), None);
    }

    #[test]
    fn test_date_columns_union_in_first_appearance_order() {
        let points = [Point::new(LatLon(-15.0, -48.0)), Point::new(LatLon(-22.0, -47.0))];
        let lookups = [
            Lookup::success(series(&[0.1, 0.2], &["2020-01-01", "2020-01-17"])),
            Lookup::success(series(&[0.3, 0.4], &["2020-01-17", "2020-02-02"])),
        ];

        let frame = build_series_frame(&points, &lookups).unwrap();
        assert_eq!(
            names(&frame),
            [
                "latitude",
                "longitude",
                "success",
                "status_code",
                "message",
                "2020-01-01",
                "2020-01-17",
                "2020-02-02",
            ]
        );

        let first = frame.column("2020-01-01").unwrap().f64().unwrap();
        assert_eq!(first.get(0), Some(0.1));
        assert_eq!(first.get(1), None);

        let shared = frame.column("2020-01-17").unwrap().f64().unwrap();
        assert_eq!(shared.get(0), Some(0.2));
        assert_eq!(shared.get(1), Some(0.3));

        let last = frame.column("2020-02-02").unwrap().f64().unwrap();
        assert_eq!(last.get(0), None);
        assert_eq!(last.get(1), Some(0.4));
    }

    #[test]
    fn test_label_column_only_when_some_point_is_labeled() {
        let points = [Point::new(LatLon(-15.0, -48.0))];
        let lookups = [Lookup::connection_error()];

        let frame = build_series_frame(&points, &lookups).unwrap();
        assert_eq!(
            names(&frame),
            ["latitude", "longitude", "success", "status_code", "message"]
        );
    }

    #[test]
    fn test_empty_points_build_an_empty_frame() {
        let frame = build_series_frame(&[], &[]).unwrap();
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.width(), 0);
    }

    #[test]
    fn test_values_follow_the_dates() {
        let points = [Point::new(LatLon(-15.0, -48.0))];

        // More values than dates: the extras have no date column to live in.
        let lookups = [Lookup::success(series(&[0.1, 0.2, 0.3], &["2020-01-01"]))];
        let frame = build_series_frame(&points, &lookups).unwrap();
        assert_eq!(frame.width(), 6);
        let only = frame.column("2020-01-01").unwrap().f64().unwrap();
        assert_eq!(only.get(0), Some(0.1));

        // Fewer values than dates: the tail dates hold null.
        let lookups = [Lookup::success(series(&[0.1], &["2020-01-01", "2020-01-17"]))];
        let frame = build_series_frame(&points, &lookups).unwrap();
        let tail = frame.column("2020-01-17").unwrap().f64().unwrap();
        assert_eq!(tail.get(0), None);
    }
}
