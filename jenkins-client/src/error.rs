//! Error types for the Jenkins client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to a Jenkins server
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required configuration (the API token) is missing or empty
    #[error("{0}")]
    Configuration(String),

    /// HTTP request failed (connection error, timeout, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Jenkins returned a non-success status code
    #[error("Jenkins API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned by Jenkins
        message: String,
    },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Create an API error from status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a configuration error (no network attempted)
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
