//! Great-circle distance between coordinates.
//!
//! Discovery and route sequencing both measure through [`DistanceMetric`], so
//! the two never drift apart. [`Haversine`] is the production metric and
//! reports statute miles.

use crate::Coordinate;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Measure the distance between two coordinates.
///
/// Implementations must be symmetric, return `0.0` for identical inputs and
/// never return NaN or infinity for valid coordinates.
pub trait DistanceMetric: Send + Sync {
    /// Distance from `from` to `to`.
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64;
}

/// Haversine great-circle distance in statute miles.
///
/// # Examples
/// ```
/// use taproute_core::{Coordinate, DistanceMetric, Haversine};
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let a = Coordinate::new(40.0, -75.0)?;
/// let b = Coordinate::new(41.0, -75.0)?;
/// let miles = Haversine.distance(a, b);
/// assert!((miles - 69.09).abs() < 0.1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        haversine_miles(from, to)
    }
}

/// Great-circle distance in statute miles using the haversine formula.
///
/// `a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)` and
/// `d = 2 · R · atan2(√a, √(1 − a))` with `R = 3959`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let lat_from = from.latitude().to_radians();
    let lat_to = to.latitude().to_radians();
    let half_d_lat = ((to.latitude() - from.latitude()).to_radians() / 2.0).sin();
    let half_d_lon = ((to.longitude() - from.longitude()).to_radians() / 2.0).sin();

    let raw = half_d_lat * half_d_lat + lat_from.cos() * lat_to.cos() * half_d_lon * half_d_lon;
    // Rounding can push `a` a hair past 1 for antipodal points.
    let a = raw.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}
