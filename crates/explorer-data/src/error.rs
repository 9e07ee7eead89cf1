//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when calling the catalog API.
///
/// Views treat every variant the same way (a network failure); the variants
/// exist for logs.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status. The error body is not parsed.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    Request(String),

    /// Request timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// Invalid base URL or endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Every fetch error is a network failure from the user's point of view.
    pub fn is_network_failure(&self) -> bool {
        true
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}
