//! Aggregate distance and duration for an ordered route.

use thiserror::Error;

use crate::{Coordinate, DistanceMetric, Located};

/// Default driving-time estimate in minutes per mile.
pub const DEFAULT_MINUTES_PER_MILE: f64 = 2.0;

/// Errors returned by [`MetricsConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MetricsConfigError {
    /// The pace was negative, NaN or infinite.
    #[error("minutes per mile must be a finite, non-negative number (got {0})")]
    InvalidPace(f64),
}

/// Tunables for trip metric estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsConfig {
    minutes_per_mile: f64,
}

impl MetricsConfig {
    /// Validates and constructs a [`MetricsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`MetricsConfigError::InvalidPace`] when `minutes_per_mile` is
    /// negative or non-finite.
    pub fn new(minutes_per_mile: f64) -> Result<Self, MetricsConfigError> {
        if !minutes_per_mile.is_finite() || minutes_per_mile < 0.0 {
            return Err(MetricsConfigError::InvalidPace(minutes_per_mile));
        }
        Ok(Self { minutes_per_mile })
    }

    /// Linear driving-time factor.
    #[must_use]
    pub const fn minutes_per_mile(&self) -> f64 {
        self.minutes_per_mile
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            minutes_per_mile: DEFAULT_MINUTES_PER_MILE,
        }
    }
}

/// Unrounded trip totals.
///
/// Keep composing with these raw values; call [`TripMetrics::rounded`] only
/// when presenting them.
///
/// # Examples
/// ```
/// use taproute_core::{Coordinate, Haversine, MetricsConfig, TripMetrics};
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let start = Coordinate::new(40.0, -75.0)?;
/// let stop = Coordinate::new(41.0, -75.0)?;
/// let metrics = TripMetrics::measure(&Haversine, start, &[stop], &MetricsConfig::default());
///
/// let shown = metrics.rounded();
/// assert_eq!(shown.total_distance_miles, 69.1);
/// assert_eq!(shown.estimated_minutes, 138.2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TripMetrics {
    total_distance_miles: f64,
    estimated_minutes: f64,
}

/// Trip totals rounded to two decimal places for display.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedMetrics {
    /// Distance in miles, two decimals.
    pub total_distance_miles: f64,
    /// Duration in minutes, two decimals.
    pub estimated_minutes: f64,
}

impl TripMetrics {
    /// Metrics of a trip that goes nowhere.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_distance_miles: 0.0,
            estimated_minutes: 0.0,
        }
    }

    /// Sum the legs from `start` through `stops` in order and derive a
    /// duration from `config`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "trip totals accumulate floating-point leg distances"
    )]
    pub fn measure<M, T>(metric: &M, start: Coordinate, stops: &[T], config: &MetricsConfig) -> Self
    where
        M: DistanceMetric + ?Sized,
        T: Located,
    {
        let mut position = start;
        let mut total_distance_miles = 0.0;
        for stop in stops {
            let next = stop.location();
            total_distance_miles += metric.distance(position, next);
            position = next;
        }
        Self {
            total_distance_miles,
            estimated_minutes: total_distance_miles * config.minutes_per_mile(),
        }
    }

    /// Total leg distance in miles.
    #[must_use]
    pub const fn total_distance_miles(&self) -> f64 {
        self.total_distance_miles
    }

    /// Estimated driving time in minutes.
    #[must_use]
    pub const fn estimated_minutes(&self) -> f64 {
        self.estimated_minutes
    }

    /// Both totals rounded to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> RoundedMetrics {
        RoundedMetrics {
            total_distance_miles: round_to_hundredths(self.total_distance_miles),
            estimated_minutes: round_to_hundredths(self.estimated_minutes),
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "presentation rounding scales by one hundred"
)]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
