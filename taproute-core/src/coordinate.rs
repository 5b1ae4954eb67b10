//! Validated WGS84 coordinates.
//!
//! A [`Coordinate`] can only be built through [`Coordinate::new`], so every
//! value that reaches the distance metric is finite and inside the valid
//! latitude and longitude ranges. Out-of-range input is rejected rather than
//! clamped.

use std::ops::RangeInclusive;

use geo::{Coord, Point};
use thiserror::Error;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Errors returned by [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    /// Latitude was non-finite or outside `[-90, 90]`.
    #[error("latitude {0} must be a finite value between -90 and 90")]
    InvalidLatitude(f64),
    /// Longitude was non-finite or outside `[-180, 180]`.
    #[error("longitude {0} must be a finite value between -180 and 180")]
    InvalidLongitude(f64),
}

/// A geographic position in decimal degrees.
///
/// # Examples
/// ```
/// use taproute_core::Coordinate;
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let philadelphia = Coordinate::new(39.9526, -75.1652)?;
/// assert_eq!(philadelphia.latitude(), 39.9526);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CoordinateParts")
)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Validates and constructs a [`Coordinate`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either component is NaN, infinite,
    /// or outside its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !LATITUDE_RANGE.contains(&latitude) {
            return Err(CoordinateError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !LONGITUDE_RANGE.contains(&longitude) {
            return Err(CoordinateError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.longitude
    }
}

/// `x = longitude`, `y = latitude`, matching `geo`'s convention.
impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self(Coord::from(value))
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = CoordinateError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Self::new(value.y, value.x)
    }
}

/// Unvalidated wire form used while deserialising.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CoordinateParts {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CoordinateParts> for Coordinate {
    type Error = CoordinateError;

    fn try_from(parts: CoordinateParts) -> Result<Self, Self::Error> {
        Self::new(parts.latitude, parts.longitude)
    }
}
