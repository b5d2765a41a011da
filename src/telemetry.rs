//! tracing subscriber setup for the CLI.
//!
//! Logs always go to stderr: stdout carries nothing but the recovered
//! plaintext, so output can be piped straight into another tool.

use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log level directive: {0}")]
    InvalidLevel(String),
    #[error("Failed to initialise tracing subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber at `level` (an `EnvFilter` directive such as
/// `warn` or `pending_decrypt=debug`). The environment is never consulted.
pub fn init(level: &str, format: LogFormat) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidLevel(e.to_string()))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))
}
