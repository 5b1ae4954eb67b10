//! Planned routes.
//!
//! Aggregates ordered stops with their trip totals.

use crate::TripMetrics;

/// An ordered path through candidate stops with its aggregate metrics.
///
/// # Examples
/// ```
/// use taproute_core::{Coordinate, Route, TripMetrics};
///
/// let stop = Coordinate::new(40.0, -75.0).expect("valid coordinate");
/// let route = Route::new(vec![stop], TripMetrics::zero());
///
/// assert_eq!(route.stops().len(), 1);
/// assert_eq!(route.metrics().total_distance_miles(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route<T> {
    stops: Vec<T>,
    metrics: TripMetrics,
}

impl<T> Route<T> {
    /// Construct a route from ordered stops and their metrics.
    #[must_use]
    pub const fn new(stops: Vec<T>, metrics: TripMetrics) -> Self {
        Self { stops, metrics }
    }

    /// Construct an empty route.
    ///
    /// # Examples
    /// ```
    /// use taproute_core::{PointOfInterest, Route};
    ///
    /// let route: Route<PointOfInterest> = Route::empty();
    /// assert!(route.stops().is_empty());
    /// assert_eq!(route.metrics().estimated_minutes(), 0.0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), TripMetrics::zero())
    }

    /// Stops in visiting order.
    #[must_use]
    pub fn stops(&self) -> &[T] {
        &self.stops
    }

    /// Aggregate distance and duration.
    #[must_use]
    pub const fn metrics(&self) -> &TripMetrics {
        &self.metrics
    }

    /// Split the route into its stops and metrics.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, TripMetrics) {
        (self.stops, self.metrics)
    }
}

impl<T> Default for Route<T> {
    fn default() -> Self {
        Self::empty()
    }
}
