//! Greedy nearest-neighbour stop ordering.
//!
//! Starting from the trip origin, the sequencer repeatedly travels to the
//! closest candidate not yet visited. It is a heuristic and makes no attempt at
//! an optimal tour. Each step scans every remaining candidate, so a full run
//! costs `O(n·k)` distance evaluations for `n` candidates and `k` stops. At the
//! tens-of-points scale this crate targets, a plain scan beats maintaining a
//! spatial index.

use crate::{Coordinate, DistanceMetric, Located, StopLimit};

/// Order up to `max_stops` candidates by repeatedly visiting the nearest one.
///
/// The caller's slice is left untouched; the result holds clones in visiting
/// order. When several remaining candidates are equally close, the one that
/// appears first in `candidates` wins, so identical inputs always produce
/// identical output. No ordering of `candidates` is assumed.
///
/// # Examples
/// ```
/// use taproute_core::{sequence_stops, Coordinate, Haversine, StopLimit};
///
/// # fn main() -> Result<(), taproute_core::CoordinateError> {
/// let start = Coordinate::new(40.0, -75.0)?;
/// let far = Coordinate::new(40.5, -75.0)?;
/// let near = Coordinate::new(40.01, -75.0)?;
///
/// let ordered = sequence_stops(&Haversine, start, &[far, near], StopLimit::new(5));
/// assert_eq!(ordered, vec![near, far]);
/// # Ok(())
/// # }
/// ```
pub fn sequence_stops<M, T>(
    metric: &M,
    start: Coordinate,
    candidates: &[T],
    max_stops: StopLimit,
) -> Vec<T>
where
    M: DistanceMetric + ?Sized,
    T: Located + Clone,
{
    let target = max_stops.get().min(candidates.len());
    let mut remaining: Vec<&T> = candidates.iter().collect();
    let mut ordered = Vec::with_capacity(target);
    let mut position = start;

    while ordered.len() < target {
        let Some(index) = nearest_index(metric, position, &remaining) else {
            break;
        };
        let next = remaining.remove(index);
        position = next.location();
        ordered.push(next.clone());
    }
    ordered
}

/// Index of the closest candidate, keeping the first on ties.
fn nearest_index<M, T>(metric: &M, position: Coordinate, remaining: &[&T]) -> Option<usize>
where
    M: DistanceMetric + ?Sized,
    T: Located,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in remaining.iter().enumerate() {
        let distance = metric.distance(position, candidate.location());
        // Strict comparison keeps the earliest candidate among equals.
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((index, distance));
        }
    }
    best.map(|(index, _)| index)
}
