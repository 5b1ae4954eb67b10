//! Process-wide logger setup for the `taproute` binary.

use std::io::Write;

use clap::ValueEnum;
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Verbosity accepted by `--log-level` and `TAPROUTE_LOG_LEVEL`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Silence all output.
    Off,
    /// Failures only.
    Error,
    /// Failures and clamped or skipped input.
    #[default]
    Warn,
    /// Per-command summaries.
    Info,
    /// Planner and discovery internals.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Equivalent `log` filter.
    #[must_use]
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Install the global logger, writing plain lines to stderr.
///
/// Stdout carries the JSON response, so diagnostics never go there.
pub(crate) fn init_logger(level: LogLevel) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder.try_init()?;
    Ok(())
}
