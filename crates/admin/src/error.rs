//! Unified error handling for the dashboard library.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::insights::InsightsError;

/// Application-level error type.
///
/// The API and insights clients fold their own failures into response
/// envelopes; this type covers the fallible setup steps around them.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API client setup failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Insights client setup failed.
    #[error("Insights error: {0}")]
    Insights(#[from] InsightsError),
}
