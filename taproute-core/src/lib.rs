//! Core routing for Taproute.
//!
//! Given a start location, a set of candidate stops and a stop limit, the
//! crate produces a greedy nearest-neighbour visiting order together with
//! its total great-circle distance and a linear driving-time estimate.
//!
//! Everything here is pure and synchronous. Inputs are validated at
//! construction ([`Coordinate::new`], [`MetricsConfig::new`],
//! [`DiscoveryQuery::new`]) so planning itself cannot fail.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coordinate;
pub mod discovery;
pub mod distance;
pub mod metrics;
pub mod planner;
pub mod poi;
pub mod request;
pub mod route;
pub mod sequencer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinate::{Coordinate, CoordinateError};
pub use discovery::{
    DEFAULT_DISCOVERY_LIMIT, DEFAULT_RADIUS_MILES, DiscoveryError, DiscoveryQuery, Nearby,
    discover_nearby,
};
pub use distance::{DistanceMetric, EARTH_RADIUS_MILES, Haversine, haversine_miles};
pub use metrics::{
    DEFAULT_MINUTES_PER_MILE, MetricsConfig, MetricsConfigError, RoundedMetrics, TripMetrics,
};
pub use planner::{NearestNeighbourPlanner, PlannerConfig, RoutePlanner};
pub use poi::{Located, PointOfInterest, Tags};
pub use request::{RouteRequest, StopLimit};
pub use route::Route;
pub use sequencer::sequence_stops;
