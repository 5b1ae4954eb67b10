//! Error types emitted by the Taproute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use taproute_core::{DiscoveryError, MetricsConfigError};
use thiserror::Error;

use crate::wire::RequestError;

/// Errors emitted by the Taproute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag or positional name.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// The configured driving pace is unusable.
    #[error("invalid --minutes-per-mile: {0}")]
    InvalidPace(#[from] MetricsConfigError),
    /// The configured search radius is unusable.
    #[error("invalid --radius: {0}")]
    InvalidRadius(#[from] DiscoveryError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument that named the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening a request file failed.
    #[error("failed to open request at {path:?}: {source}")]
    OpenRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A `plan` request decoded but failed validation.
    #[error("route request in {path:?} failed validation: {source}")]
    InvalidRouteRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: RequestError,
    },
    /// A `nearby` request decoded but failed validation.
    #[error("search request in {path:?} failed validation: {source}")]
    InvalidSearchRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: RequestError,
    },
    /// A global logger was already installed.
    #[error("failed to initialise logging: {0}")]
    InitLogger(#[from] log::SetLoggerError),
    /// Serialising the response failed.
    #[error("failed to serialise response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
