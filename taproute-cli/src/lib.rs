//! Command-line interface for planning brewery crawls.
//!
//! Each subcommand reads a JSON request file, runs it through
//! `taproute-core` and prints a JSON response on stdout. Options layer in
//! the usual order: CLI flags, then `TAPROUTE_*` environment variables, then
//! configuration files, then built-in defaults.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod input;
mod logging;
mod nearby;
mod plan;
mod wire;

pub use error::CliError;
pub use logging::LogLevel;
pub use wire::{CandidateError, RequestError};

use nearby::NearbyArgs;
use plan::PlanArgs;

const ARG_PLAN_REQUEST: &str = "request";
const ENV_PLAN_REQUEST: &str = "TAPROUTE_CMDS_PLAN_REQUEST_PATH";
const ARG_NEARBY_REQUEST: &str = "request";
const ENV_NEARBY_REQUEST: &str = "TAPROUTE_CMDS_NEARBY_REQUEST_PATH";
const ARG_DEFAULT_MAX_STOPS: &str = "default-max-stops";
const ARG_MINUTES_PER_MILE: &str = "minutes-per-mile";
const ARG_RADIUS: &str = "radius";
const ARG_LIMIT: &str = "limit";
const ARG_LOG_LEVEL: &str = "log-level";

/// Run the Taproute CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// request file cannot be read or validated, or the response cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => {
            let config = args.into_config()?;
            logging::init_logger(config.log_level)?;
            plan::run_plan_with(&config, &mut stdout)
        }
        Command::Nearby(args) => {
            let config = args.into_config()?;
            logging::init_logger(config.log_level)?;
            nearby::run_nearby_with(&config, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "taproute",
    about = "Plan nearest-neighbour brewery crawls",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order candidate breweries into a crawl.
    Plan(PlanArgs),
    /// List breweries within a radius of a point.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;
