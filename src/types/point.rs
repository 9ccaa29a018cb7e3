//! Geographic coordinates and the labeled points a series request is made
//! for.

/// Simple struct to hold latitude and longitude, in that order.
///
/// # Examples
///
/// ```
/// use satveg::LatLon;
///
/// let location = LatLon(-15.079, -48.958);
/// assert_eq!(location.0, -15.079);
/// assert_eq!(location.1, -48.958);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A coordinate to request a series for, with an optional label.
///
/// The label is free-form text (a crop name, a plot id) that is carried
/// through into the `label` column of the resulting table, making it easy to
/// tell rows apart or to use the table as a training set.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Where the series is sampled.
    pub location: LatLon,
    /// Optional tag echoed into the `label` column of the series table.
    pub label: Option<String>,
}

impl Point {
    /// Creates an unlabeled point.
    pub fn new(location: LatLon) -> Self {
        Point {
            location,
            label: None,
        }
    }

    /// Creates a point carrying a label.
    ///
    /// # Examples
    ///
    /// ```
    /// use satveg::{LatLon, Point};
    ///
    /// let point = Point::labeled(LatLon(-15.079, -48.958), "soybean");
    /// assert_eq!(point.label.as_deref(), Some("soybean"));
    /// ```
    pub fn labeled(location: LatLon, label: impl Into<String>) -> Self {
        Point {
            location,
            label: Some(label.into()),
        }
    }
}

/// Converts a bare coordinate into an unlabeled point.
///
/// # Examples
///
/// ```
/// use satveg::{LatLon, Point};
///
/// let point: Point = LatLon(-15.079, -48.958).into();
/// assert_eq!(point, Point::new(LatLon(-15.079, -48.958)));
/// ```
impl From<LatLon> for Point {
    fn from(location: LatLon) -> Self {
        Point::new(location)
    }
}
