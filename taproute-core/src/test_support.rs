//! Fixtures shared by unit, behaviour and property tests.

use crate::{Coordinate, DistanceMetric, PointOfInterest, Tags};

/// Build a named point of interest at `(latitude, longitude)`.
///
/// # Panics
///
/// Panics when the coordinate is out of range; fixtures are expected to be
/// valid.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures fail loudly on malformed literals"
)]
pub fn poi(id: &str, latitude: f64, longitude: f64) -> PointOfInterest {
    let location = Coordinate::new(latitude, longitude).expect("fixture coordinate in range");
    PointOfInterest::new(
        id,
        location,
        Tags::from([("name".to_owned(), id.to_owned())]),
    )
}

/// Taxicab distance in degrees.
///
/// Makes hand-checked orderings easy to reason about in tests where the
/// curvature of the haversine metric would only add noise.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManhattanDegrees;

impl DistanceMetric for ManhattanDegrees {
    #[expect(
        clippy::float_arithmetic,
        reason = "test metric sums absolute degree deltas"
    )]
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        (to.latitude() - from.latitude()).abs() + (to.longitude() - from.longitude()).abs()
    }
}

/// Metric reporting the same distance for every pair of distinct points.
///
/// Every candidate ties, so the sequencer must fall back to input order.
#[derive(Debug, Clone, Copy)]
pub struct ConstantMetric(pub f64);

impl DistanceMetric for ConstantMetric {
    fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        if from == to { 0.0 } else { self.0 }
    }
}
