//! CLI error type.

use storedash_admin::AppError;
use storedash_admin::config::ConfigError;
use thiserror::Error;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    App(#[from] AppError),

    /// The dashboard API reported a failure.
    #[error("API request failed: {0}")]
    Api(String),

    /// The AI endpoint reported a failure.
    #[error("Insights request failed: {0}")]
    Insights(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
