//! Plan command implementation for the Taproute CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use taproute_core::{
    Haversine, MetricsConfig, NearestNeighbourPlanner, PlannerConfig, RoutePlanner, StopLimit,
};

use crate::input::{load_json, require_existing, write_json};
use crate::wire::{PlanPayload, PlanResponse};
use crate::{
    ARG_DEFAULT_MAX_STOPS, ARG_LOG_LEVEL, ARG_MINUTES_PER_MILE, ARG_PLAN_REQUEST, CliError,
    ENV_PLAN_REQUEST, LogLevel,
};

/// Stop cap applied when a request does not carry `maxStops`.
pub(crate) const DEFAULT_MAX_STOPS: usize = 5;

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order a set of candidate breweries into a crawl. The request \
                 is a JSON file with startLat, startLng, breweries and an \
                 optional maxStops. Each stop is the closest brewery not yet \
                 visited; the route is printed as JSON with its total \
                 distance in miles and estimated driving time in minutes.",
    about = "Plan a brewery crawl from a JSON request"
)]
#[ortho_config(prefix = "TAPROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Stop cap used when the request omits `maxStops` (default 5).
    #[arg(long = ARG_DEFAULT_MAX_STOPS, value_name = "count")]
    #[serde(default)]
    pub(crate) default_max_stops: Option<usize>,
    /// Driving-time estimate in minutes per mile (default 2).
    #[arg(long = ARG_MINUTES_PER_MILE, value_name = "minutes")]
    #[serde(default)]
    pub(crate) minutes_per_mile: Option<f64>,
    /// Diagnostic verbosity written to stderr (default warn).
    #[arg(long = ARG_LOG_LEVEL, value_enum, value_name = "level")]
    #[serde(default)]
    pub(crate) log_level: Option<LogLevel>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Cap used when the request has no `maxStops`.
    pub(crate) default_max_stops: StopLimit,
    /// Planner tunables.
    pub(crate) planner: PlannerConfig,
    /// Logger filter.
    pub(crate) log_level: LogLevel,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let metrics = match args.minutes_per_mile {
            Some(pace) => MetricsConfig::new(pace)?,
            None => MetricsConfig::default(),
        };
        Ok(Self {
            request_path,
            default_max_stops: StopLimit::new(args.default_max_stops.unwrap_or(DEFAULT_MAX_STOPS)),
            planner: PlannerConfig { metrics },
            log_level: args.log_level.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_plan_with(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_plan(config)?;
    write_json(writer, &response)
}

fn execute_plan(config: &PlanConfig) -> Result<PlanResponse, CliError> {
    require_existing(&config.request_path, ARG_PLAN_REQUEST)?;
    let payload: PlanPayload = load_json(&config.request_path)?;
    let request = payload
        .into_request(config.default_max_stops)
        .map_err(|source| CliError::InvalidRouteRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let planner = NearestNeighbourPlanner::with_config(Haversine, config.planner);
    let route = planner.plan(&request);
    log::info!(
        "planned {} of {} candidate breweries",
        route.stops().len(),
        request.candidates.len()
    );
    Ok(PlanResponse::from(route))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
