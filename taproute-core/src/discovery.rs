//! Radius search around an origin.
//!
//! Discovery narrows a large set of places to the ones within driving range
//! before routing. It measures with the same [`DistanceMetric`] as the
//! sequencer, so a stop reported at 3.2 miles is 3.2 miles to both.

use thiserror::Error;

use crate::{Coordinate, DistanceMetric, Located};

/// Default search radius in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 10.0;
/// Default number of results.
pub const DEFAULT_DISCOVERY_LIMIT: usize = 20;

/// Errors returned by [`DiscoveryQuery::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DiscoveryError {
    /// The radius was negative, NaN or infinite.
    #[error("search radius must be a finite, non-negative number of miles (got {0})")]
    InvalidRadius(f64),
}

/// Radius and result cap for [`discover_nearby`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoveryQuery {
    radius_miles: f64,
    limit: usize,
}

impl DiscoveryQuery {
    /// Validates and constructs a [`DiscoveryQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::InvalidRadius`] for negative or non-finite
    /// radii.
    pub fn new(radius_miles: f64, limit: usize) -> Result<Self, DiscoveryError> {
        if !radius_miles.is_finite() || radius_miles < 0.0 {
            return Err(DiscoveryError::InvalidRadius(radius_miles));
        }
        Ok(Self {
            radius_miles,
            limit,
        })
    }

    /// Inclusive search radius in miles.
    #[must_use]
    pub const fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    /// Maximum number of results.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for DiscoveryQuery {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            limit: DEFAULT_DISCOVERY_LIMIT,
        }
    }
}

/// A candidate paired with its distance from the search origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearby<T> {
    /// The matched candidate, unchanged.
    pub candidate: T,
    /// Great-circle distance from the origin in miles.
    pub distance_miles: f64,
}

/// Keep candidates within `query.radius_miles` of `origin`, closest first.
///
/// Sorting is stable, so candidates at equal distance keep their input
/// order. At most `query.limit` results are returned.
///
/// # Examples
/// ```
/// use taproute_core::{Coordinate, DiscoveryQuery, Haversine, discover_nearby};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let origin = Coordinate::new(40.0, -75.0)?;
/// let places = vec![
///     Coordinate::new(40.05, -75.0)?,
///     Coordinate::new(45.0, -75.0)?,
///     Coordinate::new(40.01, -75.0)?,
/// ];
/// let query = DiscoveryQuery::new(10.0, 20)?;
///
/// let found = discover_nearby(&Haversine, origin, places, &query);
/// assert_eq!(found.len(), 2);
/// assert!(found[0].distance_miles < found[1].distance_miles);
/// # Ok(())
/// # }
/// ```
pub fn discover_nearby<M, T, I>(
    metric: &M,
    origin: Coordinate,
    candidates: I,
    query: &DiscoveryQuery,
) -> Vec<Nearby<T>>
where
    M: DistanceMetric + ?Sized,
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut found: Vec<Nearby<T>> = candidates
        .into_iter()
        .map(|candidate| {
            let distance_miles = metric.distance(origin, candidate.location());
            Nearby {
                candidate,
                distance_miles,
            }
        })
        .filter(|nearby| nearby.distance_miles <= query.radius_miles)
        .collect();
    found.sort_by(|lhs, rhs| lhs.distance_miles.total_cmp(&rhs.distance_miles));
    found.truncate(query.limit);
    log::debug!(
        "discovered {} candidates within {} miles",
        found.len(),
        query.radius_miles
    );
    found
}
