//! Route planning seam and the nearest-neighbour planner.
//!
//! A planner turns a [`RouteRequest`] into a [`Route`]. Invalid coordinates
//! cannot reach this point because [`Coordinate`](crate::Coordinate) rejects
//! them at construction, so planning itself never fails: empty candidate sets
//! and zero stop limits simply produce an empty route.

use crate::{
    DistanceMetric, Haversine, Located, MetricsConfig, Route, RouteRequest, TripMetrics,
    sequence_stops,
};

/// Configuration for [`NearestNeighbourPlanner`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Settings for the duration estimate.
    pub metrics: MetricsConfig,
}

/// Produce an ordered route for a request.
///
/// Planners must be `Send + Sync` so independent requests can be planned on
/// separate threads.
pub trait RoutePlanner<T>: Send + Sync {
    /// Plan a route through `request.candidates`.
    fn plan(&self, request: &RouteRequest<T>) -> Route<T>;
}

/// Greedy planner that always drives to the closest unvisited stop.
///
/// # Examples
/// ```
/// use taproute_core::{
///     Coordinate, NearestNeighbourPlanner, PointOfInterest, RoutePlanner, RouteRequest,
///     StopLimit,
/// };
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let start = Coordinate::new(40.0, -75.0)?;
/// let candidates = vec![
///     PointOfInterest::with_empty_tags("far", Coordinate::new(40.5, -75.0)?),
///     PointOfInterest::with_empty_tags("near", Coordinate::new(40.01, -75.0)?),
/// ];
/// let request = RouteRequest::new(start, candidates, StopLimit::new(5));
///
/// let route = NearestNeighbourPlanner::new().plan(&request);
/// let ids: Vec<_> = route.stops().iter().map(|poi| poi.id.as_str()).collect();
/// assert_eq!(ids, ["near", "far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NearestNeighbourPlanner<M = Haversine> {
    metric: M,
    config: PlannerConfig,
}

impl NearestNeighbourPlanner<Haversine> {
    /// Construct a haversine planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Haversine, PlannerConfig::default())
    }
}

impl Default for NearestNeighbourPlanner<Haversine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: DistanceMetric> NearestNeighbourPlanner<M> {
    /// Construct a planner with an explicit metric and configuration.
    #[must_use]
    pub const fn with_config(metric: M, config: PlannerConfig) -> Self {
        Self { metric, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl<M, T> RoutePlanner<T> for NearestNeighbourPlanner<M>
where
    M: DistanceMetric,
    T: Located + Clone + Send + Sync,
{
    fn plan(&self, request: &RouteRequest<T>) -> Route<T> {
        if request.max_stops.is_zero() {
            log::debug!(
                "stop limit is zero, skipping {} candidates",
                request.candidates.len()
            );
            return Route::empty();
        }
        let stops = sequence_stops(
            &self.metric,
            request.start,
            &request.candidates,
            request.max_stops,
        );
        let metrics = TripMetrics::measure(
            &self.metric,
            request.start,
            &stops,
            &self.config.metrics,
        );
        log::debug!(
            "planned {} of {} candidates (limit {}), {:.2} miles",
            stops.len(),
            request.candidates.len(),
            request.max_stops.get(),
            metrics.total_distance_miles()
        );
        Route::new(stops, metrics)
    }
}
