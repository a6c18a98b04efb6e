//! CLI error types.

use almanac_core::{CalendarError, EraError};
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while configuring the engine or writing output.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Era(#[from] EraError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid output: {0}")]
    InvalidOutput(String),
}
