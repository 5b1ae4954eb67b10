//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{RequestDir, brewery, crawl_breweries, decode_output, route_ids, write_utf8};
use super::*;
use crate::plan::run_plan_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use std::cell::RefCell;

struct PlanWorld {
    dir: RequestDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let dir = RequestDir::new();
        let request_path = dir.path("request.json");
        Self {
            dir,
            request_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn write_request(&self, body: &Value) {
        self.dir.write_json("request.json", body);
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["taproute".to_owned(), "plan".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn output(&self) -> Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        decode_output(&self.stdout.borrow())
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

#[given("a route request with three breweries and a limit of two")]
fn three_breweries_limit_two(#[from(world)] world: &PlanWorld) {
    world.write_request(&json!({
        "startLat": 40.0,
        "startLng": -75.0,
        "breweries": crawl_breweries(),
        "maxStops": 2,
    }));
}

#[given("a route request with seven breweries and no stop limit")]
fn seven_breweries_default_limit(#[from(world)] world: &PlanWorld) {
    let breweries: Vec<Value> = ["n1", "n2", "n3", "n4", "n5", "n6", "n7"]
        .iter()
        .zip([40.01, 40.02, 40.03, 40.04, 40.05, 40.06, 40.07])
        .map(|(id, latitude)| brewery(id, latitude, -75.0))
        .collect();
    world.write_request(&json!({
        "startLat": 40.0,
        "startLng": -75.0,
        "breweries": breweries,
    }));
}

#[given("a route request without a start latitude")]
fn request_without_start(#[from(world)] world: &PlanWorld) {
    world.write_request(&json!({
        "startLng": -75.0,
        "breweries": crawl_breweries(),
    }));
}

#[given("the route request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the route request path")]
fn omit_request_path(#[from(world)] world: &PlanWorld) {
    *world.include_request.borrow_mut() = false;
}

#[given("a pace of three minutes per mile")]
fn pace_of_three(#[from(world)] world: &PlanWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_MINUTES_PER_MILE}"), "3".to_owned()]);
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Plan(args) => {
            let config = args.into_config()?;
            let mut buffer = world.stdout.borrow_mut();
            run_plan_with(&config, &mut *buffer)
        }
        Command::Nearby(_) => panic!("expected plan command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the route as JSON")]
fn command_succeeds(#[from(world)] world: &PlanWorld) {
    let output = world.output();
    assert!(output["route"].is_array());
    assert!(output["totalDistance"].is_number());
    assert!(output["estimatedTime"].is_number());
}

#[then("the route starts at the closest brewery")]
fn route_starts_at_closest(#[from(world)] world: &PlanWorld) {
    assert_eq!(route_ids(&world.output()), vec!["A", "B"]);
}

#[then("the route has five stops")]
fn route_has_five_stops(#[from(world)] world: &PlanWorld) {
    assert_eq!(
        route_ids(&world.output()),
        vec!["n1", "n2", "n3", "n4", "n5"]
    );
}

#[then("the estimated time is three times the distance")]
#[expect(
    clippy::float_arithmetic,
    reason = "test uses float maths for assertions"
)]
fn estimated_time_tracks_pace(#[from(world)] world: &PlanWorld) {
    let output = world.output();
    let total = output["totalDistance"].as_f64().expect("totalDistance");
    let minutes = output["estimatedTime"].as_f64().expect("estimatedTime");
    assert!((minutes - total * 3.0).abs() < 0.05);
}

#[then("the command fails because the route request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::InvalidRouteRequest { source, .. } => {
            assert_eq!(*source, RequestError::MissingField("startLat"));
        }
        other => panic!("expected InvalidRouteRequest, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::ParseRequest { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_happy_path, "planning a crawl from a JSON request");
register_plan_scenario!(plan_default_limit, "falling back to the default stop limit");
register_plan_scenario!(plan_configured_pace, "honouring a configured driving pace");
register_plan_scenario!(plan_missing_start, "rejecting a request without a start");
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_missing_request, "rejecting missing request paths");
