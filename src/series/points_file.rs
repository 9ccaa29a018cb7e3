//! Reads request points from a delimited text file.
//!
//! The file must have a header row and `latitude` and `longitude` columns.
//! A `label` column is picked up when present; any other column is ignored.

use crate::error::SatvegError;
use crate::types::point::{LatLon, Point};
use polars::prelude::*;
use std::path::Path;

pub(crate) fn read_points_csv(path: &Path, separator: u8) -> Result<Vec<Point>, SatvegError> {
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_separator(separator))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| SatvegError::PointsFileRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| SatvegError::PointsFileRead(path.to_path_buf(), e))?;

    points_from_frame(&frame, path)
}

fn points_from_frame(frame: &DataFrame, path: &Path) -> Result<Vec<Point>, SatvegError> {
    let latitudes = coordinate_column(frame, "latitude", path)?;
    let longitudes = coordinate_column(frame, "longitude", path)?;
    let labels = match frame.column("label") {
        Ok(column) => Some(column.cast(&DataType::String)?.str()?.clone()),
        Err(_) => None,
    };

    let mut points = Vec::with_capacity(frame.height());
    for row in 0..frame.height() {
        let latitude = latitudes
            .get(row)
            .ok_or_else(|| invalid_coordinate(path, "latitude", row))?;
        let longitude = longitudes
            .get(row)
            .ok_or_else(|| invalid_coordinate(path, "longitude", row))?;
        let label = labels
            .as_ref()
            .and_then(|labels| labels.get(row))
            .map(str::to_string);
        points.push(Point {
            location: LatLon(latitude, longitude),
            label,
        });
    }
    Ok(points)
}

fn coordinate_column(
    frame: &DataFrame,
    column: &'static str,
    path: &Path,
) -> Result<Float64Chunked, SatvegError> {
    let found = frame
        .column(column)
        .map_err(|_| SatvegError::MissingPointsColumn {
            path: path.to_path_buf(),
            column,
        })?;
    Ok(found.cast(&DataType::Float64)?.f64()?.clone())
}

fn invalid_coordinate(path: &Path, column: &'static str, row: usize) -> SatvegError {
    SatvegError::InvalidPointsCoordinate {
        path: path.to_path_buf(),
        column,
        row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn points_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_labeled_points() {
        let file = points_file(
            "label;latitude;longitude\nsoybean;-15.5;-48.2\nsugarcane;-22.0;-47.1\n",
        );
        let points = read_points_csv(file.path(), b';').unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label.as_deref(), Some("soybean"));
        assert_eq!(points[0].location, LatLon(-15.5, -48.2));
        assert_eq!(points[1].label.as_deref(), Some("sugarcane"));
        assert_eq!(points[1].location, LatLon(-22.0, -47.1));
    }

    #[test]
    fn test_label_column_is_optional() {
        let file = points_file("latitude;longitude\n-15.5;-48.2\n");
        let points = read_points_csv(file.path(), b';').unwrap();
        assert_eq!(points, vec![Point::new(LatLon(-15.5, -48.2))]);
    }

    #[test]
    fn test_unrelated_columns_are_ignored() {
        let file = points_file("id;latitude;longitude;note\n7;-15.5;-48.2;check\n");
        let points = read_points_csv(file.path(), b';').unwrap();
        assert_eq!(points, vec![Point::new(LatLon(-15.5, -48.2))]);
    }

    #[test]
    fn test_respects_the_separator() {
        let file = points_file("latitude,longitude\n-15.5,-48.2\n");
        let points = read_points_csv(file.path(), b',').unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].location, LatLon(-15.5, -48.2));
    }

    #[test]
    fn test_integer_coordinates_are_widened() {
        let file = points_file("latitude;longitude\n-15;-48\n");
        let points = read_points_csv(file.path(), b';').unwrap();
        assert_eq!(points[0].location, LatLon(-15.0, -48.0));
    }

    #[test]
    fn test_missing_coordinate_column_is_reported() {
        let file = points_file("label;latitude\nsoybean;-15.5\n");
        let result = read_points_csv(file.path(), b';');
        assert!(matches!(
            result,
            Err(SatvegError::MissingPointsColumn { column: "longitude", .. })
        ));
    }

    #[test]
    fn test_unparseable_coordinate_is_reported_with_its_row() {
        let file = points_file("latitude;longitude\nnorth;-48.2\n");
        let result = read_points_csv(file.path(), b';');
        assert!(matches!(
            result,
            Err(SatvegError::InvalidPointsCoordinate { column: "latitude", row: 0, .. })
        ));
    }

    #[test]
    fn test_header_only_file_yields_no_points() {
        let file = points_file("latitude;longitude\n");
        let points = read_points_csv(file.path(), b';').unwrap();
        assert!(points.is_empty());
    }
}
