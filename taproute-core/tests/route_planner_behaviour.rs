//! Behavioural tests for `NearestNeighbourPlanner` using rstest-bdd.

use std::cell::RefCell;
use std::collections::HashSet;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use taproute_core::test_support::poi;
use taproute_core::{
    Coordinate, Located, NearestNeighbourPlanner, PointOfInterest, Route, RoutePlanner,
    RouteRequest, StopLimit, haversine_miles,
};

#[derive(Debug)]
struct PlannerWorld {
    start: RefCell<Coordinate>,
    candidates: RefCell<Vec<PointOfInterest>>,
    limit: RefCell<StopLimit>,
    routes: RefCell<Vec<Route<PointOfInterest>>>,
}

impl PlannerWorld {
    fn new() -> Self {
        Self {
            start: RefCell::new(coordinate(0.0, 0.0)),
            candidates: RefCell::new(Vec::new()),
            limit: RefCell::new(StopLimit::default()),
            routes: RefCell::new(Vec::new()),
        }
    }

    fn request(&self) -> RouteRequest<PointOfInterest> {
        RouteRequest::new(
            *self.start.borrow(),
            self.candidates.borrow().clone(),
            *self.limit.borrow(),
        )
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn first_route(&self) -> Route<PointOfInterest> {
        self.routes
            .borrow()
            .first()
            .cloned()
            .expect("a route should be planned before assertions")
    }
}

#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("scenario coordinates are valid")
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::new()
}

#[given("a start near Philadelphia")]
fn given_philadelphia_start(world: &PlannerWorld) {
    world.start.replace(coordinate(40.0, -75.0));
}

#[given("a start on the prime meridian")]
fn given_meridian_start(world: &PlannerWorld) {
    world.start.replace(coordinate(0.0, 0.0));
}

#[given("no candidate stops")]
fn given_no_candidates(world: &PlannerWorld) {
    world.candidates.replace(Vec::new());
}

#[given("three candidate stops around the start")]
fn given_three_candidates(world: &PlannerWorld) {
    world.candidates.replace(vec![
        poi("A", 40.01, -75.0),
        poi("B", 40.0, -75.5),
        poi("C", 40.5, -75.0),
    ]);
}

#[given("two candidate stops mirrored across the meridian")]
fn given_mirrored_candidates(world: &PlannerWorld) {
    world
        .candidates
        .replace(vec![poi("east", 0.0, 0.5), poi("west", 0.0, -0.5)]);
}

#[given("a stop limit of zero")]
fn given_limit_zero(world: &PlannerWorld) {
    world.limit.replace(StopLimit::new(0));
}

#[given("a stop limit of one")]
fn given_limit_one(world: &PlannerWorld) {
    world.limit.replace(StopLimit::new(1));
}

#[given("a stop limit of two")]
fn given_limit_two(world: &PlannerWorld) {
    world.limit.replace(StopLimit::new(2));
}

#[given("a stop limit of five")]
fn given_limit_five(world: &PlannerWorld) {
    world.limit.replace(StopLimit::new(5));
}

#[given("a stop limit of ten")]
fn given_limit_ten(world: &PlannerWorld) {
    world.limit.replace(StopLimit::new(10));
}

#[when("the route is planned")]
fn when_planned(world: &PlannerWorld) {
    let route = NearestNeighbourPlanner::new().plan(&world.request());
    world.routes.replace(vec![route]);
}

#[when("the route is planned twice")]
fn when_planned_twice(world: &PlannerWorld) {
    let planner = NearestNeighbourPlanner::new();
    let first = planner.plan(&world.request());
    let second = planner.plan(&world.request());
    world.routes.replace(vec![first, second]);
}

#[then("the route is empty")]
fn then_route_empty(world: &PlannerWorld) {
    assert!(world.first_route().stops().is_empty());
}

#[then("the total distance is zero")]
#[expect(clippy::float_cmp, reason = "an empty route sums no legs")]
fn then_zero_distance(world: &PlannerWorld) {
    let route = world.first_route();
    assert_eq!(route.metrics().total_distance_miles(), 0.0);
    assert_eq!(route.metrics().estimated_minutes(), 0.0);
}

#[then("the first stop is the closest to the start")]
fn then_first_closest(world: &PlannerWorld) {
    let route = world.first_route();
    let start = *world.start.borrow();
    let candidates = world.candidates.borrow();
    let closest = closest_to(start, &candidates);
    assert_eq!(route.stops().first().map(|s| s.id.as_str()), closest);
}

#[then("the second stop is the closest remaining to the first stop")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_second_closest_to_first(world: &PlannerWorld) {
    let route = world.first_route();
    let first = route.stops().first().expect("route has a first stop");
    let remaining: Vec<PointOfInterest> = world
        .candidates
        .borrow()
        .iter()
        .filter(|candidate| candidate.id != first.id)
        .cloned()
        .collect();
    let expected = closest_to(first.location(), &remaining);
    assert_eq!(route.stops().get(1).map(|s| s.id.as_str()), expected);
    assert_eq!(route.stops().len(), 2);
}

#[then("the total distance equals the sum of the legs")]
#[expect(
    clippy::float_arithmetic,
    reason = "leg sums are floating-point by nature"
)]
fn then_total_matches_legs(world: &PlannerWorld) {
    let route = world.first_route();
    let mut position = *world.start.borrow();
    let mut expected = 0.0;
    for stop in route.stops() {
        expected += haversine_miles(position, stop.location());
        position = stop.location();
    }
    assert!((route.metrics().total_distance_miles() - expected).abs() < 1e-9);
}

#[then("both plans pick the first mirrored stop")]
fn then_tie_broken_by_order(world: &PlannerWorld) {
    let routes = world.routes.borrow();
    assert_eq!(routes.len(), 2);
    for route in routes.iter() {
        let ids: Vec<&str> = route.stops().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["east"]);
    }
}

#[then("every candidate appears exactly once")]
fn then_every_candidate_once(world: &PlannerWorld) {
    let route = world.first_route();
    let visited: HashSet<&str> = route.stops().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(visited.len(), route.stops().len());
    assert_eq!(route.stops().len(), world.candidates.borrow().len());
}

/// Closest candidate id, first wins on ties, computed independently of the
/// planner.
fn closest_to(from: Coordinate, candidates: &[PointOfInterest]) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let distance = haversine_miles(from, candidate.location());
        if best.is_none_or(|(_, nearest)| distance < nearest) {
            best = Some((candidate.id.as_str(), distance));
        }
    }
    best.map(|(id, _)| id)
}

#[scenario(path = "tests/features/route_planner.feature", index = 0)]
fn no_candidates(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planner.feature", index = 1)]
fn zero_limit(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planner.feature", index = 2)]
fn greedy_from_previous_stop(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planner.feature", index = 3)]
fn ties_follow_input_order(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_planner.feature", index = 4)]
fn generous_limit(world: PlannerWorld) {
    let _ = world;
}
