//! Error types for the insights client.

use thiserror::Error;

/// Errors that can occur when requesting AI insights.
#[derive(Debug, Error)]
pub enum InsightsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("AI API request failed: {0}")]
    Status(u16),

    /// Failed to parse the completion.
    #[error("parse error: {0}")]
    Parse(String),

    /// The completion carried no text.
    #[error("No insights generated from AI response")]
    EmptyCompletion,

    /// A header value could not be encoded.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
}
