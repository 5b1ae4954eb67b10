//! Facade crate for the Taproute brewery crawl planner.
//!
//! This crate re-exports the routing core: coordinates, the haversine metric,
//! the nearest-neighbour planner and radius discovery. Fixtures for downstream
//! tests sit behind the `test-support` feature.

#![forbid(unsafe_code)]

pub use taproute_core::{
    Coordinate, CoordinateError, DiscoveryError, DiscoveryQuery, DistanceMetric, Haversine,
    Located, MetricsConfig, MetricsConfigError, Nearby, NearestNeighbourPlanner, PlannerConfig,
    PointOfInterest, RoundedMetrics, Route, RoutePlanner, RouteRequest, StopLimit, Tags,
    TripMetrics, discover_nearby, haversine_miles, sequence_stops,
};

#[cfg(feature = "test-support")]
pub use taproute_core::test_support;
