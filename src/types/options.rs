//! Defines the typed request options accepted by the SATVeg series service:
//! vegetation index profile, satellite, pre-filtering and smoothing filter.
//!
//! Every option knows the exact value the service expects on the wire, so the
//! rest of the crate never handles raw strings or magic integers.

use crate::error::SatvegError;
use std::fmt;

/// The vegetation index whose temporal profile is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Normalized Difference Vegetation Index.
    Ndvi,
    /// Enhanced Vegetation Index.
    Evi,
}

impl Profile {
    pub(crate) fn wire_value(&self) -> &'static str {
        match self {
            Profile::Ndvi => "ndvi",
            Profile::Evi => "evi",
        }
    }
}

/// Formats a `Profile` using its wire value.
///
/// # Examples
///
/// ```
/// use satveg::Profile;
///
/// assert_eq!(format!("{}", Profile::Ndvi), "ndvi");
/// assert_eq!(Profile::Evi.to_string(), "evi");
/// ```
impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

/// The MODIS platform whose observations feed the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Satellite {
    /// The Terra satellite (morning overpass).
    Terra,
    /// The Aqua satellite (afternoon overpass).
    Aqua,
    /// Terra and Aqua observations combined into a single series.
    Combined,
}

impl Satellite {
    pub(crate) fn wire_value(&self) -> &'static str {
        match self {
            Satellite::Terra => "terra",
            Satellite::Aqua => "aqua",
            Satellite::Combined => "comb",
        }
    }
}

/// Formats a `Satellite` using its wire value.
///
/// # Examples
///
/// ```
/// use satveg::Satellite;
///
/// assert_eq!(Satellite::Terra.to_string(), "terra");
/// assert_eq!(Satellite::Combined.to_string(), "comb");
/// ```
impl fmt::Display for Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}

/// Server-side data cleaning applied before any smoothing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreFilter {
    /// No pre-filtering; the raw series is used as-is.
    None,
    /// Correction of no-data readings.
    NoData,
    /// Correction of cloud-contaminated readings.
    Cloud,
    /// Correction of both cloud-contaminated and no-data readings.
    CloudAndNoData,
}

impl PreFilter {
    pub(crate) fn code(&self) -> u8 {
        match self {
            PreFilter::None => 0,
            PreFilter::NoData => 1,
            PreFilter::Cloud => 2,
            PreFilter::CloudAndNoData => 3,
        }
    }
}

/// Server-side smoothing filter applied to the series, together with its
/// algorithm-specific parameter.
///
/// The parameter lives inside the variant, so a filter that takes none
/// ([`Filter::None`], [`Filter::Wavelet`]) cannot be given one. Parameter
/// ranges are checked when the client is built:
/// [`Filter::FlatBottom`] accepts `0`, `10`, `20` or `30`;
/// [`Filter::SavitskyGolay`] accepts `2` through `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// No smoothing; the (pre-filtered) series is returned as-is.
    None,
    /// FlatBottom filter with the given window.
    FlatBottom(u8),
    /// Wavelet filter; takes no parameter.
    Wavelet,
    /// Savitsky-Golay filter with the given window.
    SavitskyGolay(u8),
}

impl Filter {
    pub(crate) fn wire_value(&self) -> Option<&'static str> {
        match self {
            Filter::None => None,
            Filter::FlatBottom(_) => Some("flt"),
            Filter::Wavelet => Some("wav"),
            Filter::SavitskyGolay(_) => Some("sav"),
        }
    }

    pub(crate) fn parameter(&self) -> Option<u8> {
        match self {
            Filter::FlatBottom(parameter) | Filter::SavitskyGolay(parameter) => Some(*parameter),
            Filter::None | Filter::Wavelet => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Filter::None => "none",
            Filter::FlatBottom(_) => "flat-bottom",
            Filter::Wavelet => "wavelet",
            Filter::SavitskyGolay(_) => "savitsky-golay",
        }
    }

    /// Checks the parameter against the domain the service accepts for this
    /// filter, so an invalid combination is rejected before it reaches the
    /// wire.
    pub(crate) fn validate(&self) -> Result<(), SatvegError> {
        match self {
            Filter::None | Filter::Wavelet => Ok(()),
            Filter::FlatBottom(parameter) => match parameter {
                0 | 10 | 20 | 30 => Ok(()),
                _ => Err(SatvegError::InvalidFilterParameter {
                    filter: *self,
                    parameter: *parameter,
                    allowed: "0, 10, 20 or 30",
                }),
            },
            Filter::SavitskyGolay(parameter) => match parameter {
                2..=6 => Ok(()),
                _ => Err(SatvegError::InvalidFilterParameter {
                    filter: *self,
                    parameter: *parameter,
                    allowed: "2 through 6",
                }),
            },
        }
    }
}

/// Formats a `Filter` using its human-readable name (the parameter is not
/// part of the name).
///
/// # Examples
///
/// ```
/// use satveg::Filter;
///
/// assert_eq!(Filter::FlatBottom(10).to_string(), "flat-bottom");
/// assert_eq!(Filter::Wavelet.to_string(), "wavelet");
/// ```
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
