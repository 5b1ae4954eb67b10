//! Nearby command: radius search over a supplied brewery list.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use taproute_core::{
    DEFAULT_DISCOVERY_LIMIT, DEFAULT_RADIUS_MILES, DiscoveryQuery, Haversine, discover_nearby,
};

use crate::input::{load_json, require_existing, write_json};
use crate::wire::{NearbyPayload, NearbyResponse};
use crate::{
    ARG_LIMIT, ARG_LOG_LEVEL, ARG_NEARBY_REQUEST, ARG_RADIUS, CliError, ENV_NEARBY_REQUEST,
    LogLevel,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Filter a brewery list down to those within a radius of a \
                 point, closest first. The request is a JSON file with lat, \
                 lng, breweries and optional radius and limit overrides.",
    about = "Find breweries near a point"
)]
#[ortho_config(prefix = "TAPROUTE")]
pub(crate) struct NearbyArgs {
    /// Path to a JSON file containing the search request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Search radius in miles when the request has none (default 10).
    #[arg(long = ARG_RADIUS, value_name = "miles")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// Result cap when the request has none (default 20).
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Diagnostic verbosity written to stderr (default warn).
    #[arg(long = ARG_LOG_LEVEL, value_enum, value_name = "level")]
    #[serde(default)]
    pub(crate) log_level: Option<LogLevel>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    pub(crate) request_path: Utf8PathBuf,
    /// Used for any field the request leaves out.
    pub(crate) defaults: DiscoveryQuery,
    pub(crate) log_level: LogLevel,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_NEARBY_REQUEST,
            env: ENV_NEARBY_REQUEST,
        })?;
        let defaults = DiscoveryQuery::new(
            args.radius.unwrap_or(DEFAULT_RADIUS_MILES),
            args.limit.unwrap_or(DEFAULT_DISCOVERY_LIMIT),
        )?;
        Ok(Self {
            request_path,
            defaults,
            log_level: args.log_level.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_nearby_with(
    config: &NearbyConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_existing(&config.request_path, ARG_NEARBY_REQUEST)?;
    let payload: NearbyPayload = load_json(&config.request_path)?;
    let search = payload
        .into_search(&config.defaults)
        .map_err(|source| CliError::InvalidSearchRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let found = discover_nearby(&Haversine, search.origin, search.candidates, &search.query);
    log::info!(
        "found {} breweries within {} miles",
        found.len(),
        search.query.radius_miles()
    );
    write_json(writer, &NearbyResponse::from(found))
}
