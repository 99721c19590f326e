//! Error types for the data-service boundary
//!
//! The analytics core never returns these; they only exist between a
//! [`CorpusSource`](crate::source::CorpusSource) and its caller.

use thiserror::Error;

/// Errors that can occur while fetching a corpus payload
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server error with status code
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Payload does not exist at the source
    #[error("Payload not found: {0}")]
    NotFound(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Payload is not valid JSON
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Check if a retry could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::ServerError(status) => *status >= 500,
            Self::Timeout => true,
            Self::NotFound(_) | Self::Decode(_) | Self::InvalidUrl(_) | Self::Io(_) => false,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
