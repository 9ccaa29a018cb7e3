use crate::error::SatvegError;
use crate::series::frame::SeriesFrame;
use crate::series::points_file::read_points_csv;
use crate::series::table::build_series_frame;
use crate::types::lookup::{Lookup, SeriesData};
use crate::types::options::{Filter, PreFilter, Profile, Satellite};
use crate::types::point::{LatLon, Point};
use bon::bon;
use log::{info, warn};
use reqwest::StatusCode;
use std::path::Path;

const SERIES_ENDPOINT: &str = "https://api.cnptia.embrapa.br/satveg/v1/series";

/// The main entry point for interacting with the SATVeg series service.
///
/// A `Satveg` instance holds the API token and the request options (index
/// profile, satellite, pre-filtering, smoothing filter) shared by every
/// lookup it performs. Requests are synchronous; a batch of points is
/// fetched one coordinate at a time.
///
/// # Example
///
/// ```no_run
/// use satveg::{LatLon, Point, Profile, Satveg, SatvegError};
///
/// fn example() -> Result<(), SatvegError> {
///     let client = Satveg::builder()
///         .token("MY-API-TOKEN")
///         .profile(Profile::Evi)
///         .build()?;
///
///     let series = client.series(&[Point::new(LatLon(-15.079, -48.958))])?;
///     println!("{}", series.frame);
///     Ok(())
/// }
/// ```
pub struct Satveg {
    token: String,
    profile: Profile,
    satellite: Satellite,
    pre_filter: PreFilter,
    filter: Filter,
    endpoint: String,
    http: reqwest::blocking::Client,
}

#[bon]
impl Satveg {
    /// Creates a new `Satveg` client using the builder pattern.
    ///
    /// # Arguments
    ///
    /// * `token` - The API token identifying the caller (required).
    /// * `profile` - The requested vegetation index. Defaults to
    ///   [`Profile::Ndvi`].
    /// * `satellite` - The observing platform. Defaults to
    ///   [`Satellite::Terra`].
    /// * `pre_filter` - Server-side data cleaning. Defaults to
    ///   [`PreFilter::CloudAndNoData`].
    /// * `filter` - Server-side smoothing filter. Defaults to
    ///   [`Filter::None`].
    /// * `endpoint` - Overrides the service URL, for tests or proxies.
    ///   Defaults to the production series endpoint.
    ///
    /// # Returns
    ///
    /// A `Result` containing the configured client, or a `SatvegError` if
    /// the filter parameter is out of range or the HTTP client cannot be
    /// built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{Filter, Satellite, Satveg, SatvegError};
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder()
    ///         .token("MY-API-TOKEN")
    ///         .satellite(Satellite::Combined)
    ///         .filter(Filter::SavitskyGolay(4))
    ///         .build()?;
    ///     # let _ = client;
    ///     Ok(())
    /// }
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] token: String,
        profile: Option<Profile>,
        satellite: Option<Satellite>,
        pre_filter: Option<PreFilter>,
        filter: Option<Filter>,
        #[builder(into)] endpoint: Option<String>,
    ) -> Result<Self, SatvegError> {
        let profile = profile.unwrap_or(Profile::Ndvi);
        let satellite = satellite.unwrap_or(Satellite::Terra);
        let pre_filter = pre_filter.unwrap_or(PreFilter::CloudAndNoData);
        let filter = filter.unwrap_or(Filter::None);
        filter.validate()?;

        let endpoint = endpoint.unwrap_or_else(|| SERIES_ENDPOINT.to_string());
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("satveg/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SatvegError::HttpClient)?;

        Ok(Satveg {
            token,
            profile,
            satellite,
            pre_filter,
            filter,
            endpoint,
            http,
        })
    }

    /// Requests the series for a single coordinate.
    ///
    /// The outcome is always a [`Lookup`]: an unreachable service, a
    /// rejected token and a failing HTTP status are recorded in the
    /// envelope rather than returned as errors, so batch callers can keep
    /// going. The only error case is a `200` answer whose body is not
    /// valid JSON.
    ///
    /// # Arguments
    ///
    /// * `location` - The coordinate to sample.
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`Lookup`] for this coordinate, or
    /// [`SatvegError::MalformedResponse`] when a successful answer cannot
    /// be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{LatLon, Satveg, SatvegError};
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder().token("MY-API-TOKEN").build()?;
    ///     let lookup = client.lookup(LatLon(-15.079, -48.958))?;
    ///     if let Some(series) = lookup.series {
    ///         println!("{} readings", series.values.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn lookup(&self, location: LatLon) -> Result<Lookup, SatvegError> {
        info!(
            "Requesting {} series for ({}, {})",
            self.profile, location.0, location.1
        );
        let request = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .query(&self.query_params(location));

        let response = match request.send() {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not reach {}: {:?}", self.endpoint, e);
                return Ok(Lookup::connection_error());
            }
        };

        match response.status() {
            StatusCode::OK => {
                let body = match response.text() {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Could not read response body from {}: {:?}", self.endpoint, e);
                        return Ok(Lookup::connection_error());
                    }
                };
                let series = serde_json::from_str::<SeriesData>(&body)
                    .map_err(SatvegError::MalformedResponse)?;
                Ok(Lookup::success(series))
            }
            StatusCode::UNAUTHORIZED => {
                warn!("The service rejected the API token");
                Ok(Lookup::invalid_credentials())
            }
            status => {
                warn!("HTTP error {} for ({}, {})", status, location.0, location.1);
                Ok(Lookup::not_processed(status.as_u16()))
            }
        }
    }

    /// Requests the series for a batch of points and assembles them into a
    /// single table.
    ///
    /// Points are fetched in order, one request each. Each point becomes
    /// one row of the resulting [`SeriesFrame`], whether its lookup
    /// succeeded or not; date columns are the union of all observed dates,
    /// ordered by first appearance. An empty batch produces an empty frame
    /// without touching the network.
    ///
    /// # Arguments
    ///
    /// * `points` - The coordinates to sample, with optional labels.
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`SeriesFrame`], or a `SatvegError` if a
    /// successful answer cannot be parsed or the table cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{LatLon, Point, Satveg, SatvegError};
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder().token("MY-API-TOKEN").build()?;
    ///     let series = client.series(&[
    ///         Point::labeled(LatLon(-15.079, -48.958), "soybean"),
    ///         Point::new(LatLon(-22.655, -47.168)),
    ///     ])?;
    ///     println!("{}", series.frame);
    ///     Ok(())
    /// }
    /// ```
    pub fn series(&self, points: &[Point]) -> Result<SeriesFrame, SatvegError> {
        let mut lookups = Vec::with_capacity(points.len());
        for point in points {
            lookups.push(self.lookup(point.location)?);
        }
        Ok(SeriesFrame::new(build_series_frame(points, &lookups)?))
    }

    /// Reads points from a delimited text file and requests their series.
    ///
    /// The file must have a header row with `latitude` and `longitude`
    /// columns; a `label` column is picked up when present. The separator
    /// defaults to `;` and can be overridden with `.separator(..)`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use satveg::{Satveg, SatvegError};
    /// use std::path::Path;
    ///
    /// fn example() -> Result<(), SatvegError> {
    ///     let client = Satveg::builder().token("MY-API-TOKEN").build()?;
    ///     let series = client
    ///         .series_from_csv(Path::new("points.csv"))
    ///         .separator(b',')
    ///         .call()?;
    ///     println!("{}", series.frame);
    ///     Ok(())
    /// }
    /// ```
    #[builder(start_fn = series_from_csv)]
    #[doc(hidden)]
    pub fn build_series_from_csv(
        &self,
        #[builder(start_fn)] path: &Path,
        separator: Option<u8>,
    ) -> Result<SeriesFrame, SatvegError> {
        let separator = separator.unwrap_or(b';');
        let points = read_points_csv(path, separator)?;
        self.series(&points)
    }

    fn query_params(&self, location: LatLon) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("tipoPerfil", self.profile.wire_value().to_string()),
            ("satelite", self.satellite.wire_value().to_string()),
            ("latitude", location.0.to_string()),
            ("longitude", location.1.to_string()),
            ("preFiltro", self.pre_filter.code().to_string()),
        ];
        if let Some(filter) = self.filter.wire_value() {
            params.push(("filtro", filter.to_string()));
        }
        if let Some(parameter) = self.filter.parameter() {
            params.push(("parametroFiltro", parameter.to_string()));
        }
        params
    }
}
