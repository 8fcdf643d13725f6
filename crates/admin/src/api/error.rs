//! Error types for the API client.

use thiserror::Error;

/// Errors that can occur while calling the dashboard API.
///
/// These never escape [`super::ApiClient::call`]; they are folded into a
/// failed [`super::ApiResponse`] at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Response body was not valid JSON.
    #[error("failed to parse response: {0}")]
    Decode(String),

    /// A request header could not be encoded.
    #[error("invalid header {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// Status code reported in the failure envelope.
    ///
    /// Every failure is reported as 500; a non-success response keeps its
    /// own code only in the message.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Status(_) | Self::Http(_) | Self::Decode(_) | Self::InvalidHeader(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(
            ApiError::Decode("expected value".to_string()).to_string(),
            "failed to parse response: expected value"
        );
    }

    #[test]
    fn test_status_code() {
        assert_eq!(ApiError::Status(503).status_code(), 500);
        assert_eq!(ApiError::Status(404).status_code(), 500);
        assert_eq!(ApiError::Decode(String::new()).status_code(), 500);
        assert_eq!(ApiError::InvalidHeader("x".to_string()).status_code(), 500);
    }
}
