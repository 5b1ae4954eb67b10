//! Inputs to a planning call.

use crate::Coordinate;

/// Maximum number of stops a route may contain.
///
/// Zero is a valid limit and produces an empty route. Signed inputs clamp
/// negatives to zero instead of failing.
///
/// # Examples
/// ```
/// use taproute_core::StopLimit;
///
/// assert_eq!(StopLimit::new(5).get(), 5);
/// assert_eq!(StopLimit::from_signed(-3).get(), 0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StopLimit(usize);

impl StopLimit {
    /// Limit of exactly `stops`.
    #[must_use]
    pub const fn new(stops: usize) -> Self {
        Self(stops)
    }

    /// Limit from a signed count; anything `<= 0` becomes zero.
    #[must_use]
    pub fn from_signed(stops: i64) -> Self {
        if stops <= 0 {
            if stops < 0 {
                log::warn!("negative stop limit {stops} treated as zero");
            }
            return Self(0);
        }
        Self(usize::try_from(stops).unwrap_or(usize::MAX))
    }

    /// The limit as a count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether no stops may be produced.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for StopLimit {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Parameters for a single planning call.
///
/// The request owns its candidates; planners read them and return clones, so
/// callers may keep using their own copies.
///
/// # Examples
/// ```
/// use taproute_core::{Coordinate, PointOfInterest, RouteRequest, StopLimit};
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let start = Coordinate::new(40.0, -75.0)?;
/// let request: RouteRequest<PointOfInterest> =
///     RouteRequest::new(start, Vec::new(), StopLimit::new(5));
/// assert!(request.candidates.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest<T> {
    /// Where the trip begins.
    pub start: Coordinate,
    /// Stops eligible for the route, in no particular order.
    pub candidates: Vec<T>,
    /// Upper bound on the number of stops.
    pub max_stops: StopLimit,
}

impl<T> RouteRequest<T> {
    /// Bundle a start, candidates and stop limit.
    #[must_use]
    pub const fn new(start: Coordinate, candidates: Vec<T>, max_stops: StopLimit) -> Self {
        Self {
            start,
            candidates,
            max_stops,
        }
    }
}
