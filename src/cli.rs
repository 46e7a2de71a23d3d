//! CLI command implementations for Bomber Match.

pub(crate) mod run;
pub(crate) mod validate;

mod bots;
mod output;

use bomber_match::{ConfigError, LayoutError, MatchError};
use clap::ValueEnum;
use thiserror::Error;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, Error)]
#[error("{message}")]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<MatchError> for CliError {
    fn from(e: MatchError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::new(format!("Invalid layout: {e}"))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(e.to_string())
    }
}
