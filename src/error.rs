//! Unified error handling for the samhita crate
//!
//! The analytics core is infallible; errors only arise at the edges (fetching
//! payloads, loading configuration, writing output). This module gathers those
//! into a single `Error` enum while keeping [`FetchError`] usable on its own.
//!
//! # Architecture
//!
//! - [`SamhitaErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping the domain-specific errors

use std::io;
use thiserror::Error;

pub use crate::utils::error::FetchError;

/// Common trait for all samhita error types
pub trait SamhitaErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout)
    Network,
    /// Payload decoding errors
    Parsing,
    /// File and I/O errors
    Storage,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Short description for user-facing messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::Network => "network error",
            Self::Parsing => "parsing error",
            Self::Storage => "storage error",
            Self::Config => "configuration error",
            Self::Other => "other error",
        }
    }
}

impl SamhitaErrorTrait for FetchError {
    fn is_recoverable(&self) -> bool {
        FetchError::is_recoverable(self)
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(_) | Self::ServerError(_) | Self::Timeout | Self::NotFound(_) => {
                ErrorCategory::Network
            }
            Self::Decode(_) => ErrorCategory::Parsing,
            Self::InvalidUrl(_) => ErrorCategory::Config,
            Self::Io(_) => ErrorCategory::Storage,
        }
    }
}

/// Unified error type for the samhita crate
#[derive(Error, Debug)]
pub enum Error {
    /// Payload fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SamhitaErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_recoverable(),
            Self::Io(_) => true,
            Self::Json(_) | Self::Config(_) | Self::Other { .. } => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(e) => SamhitaErrorTrait::category(e),
            Self::Io(_) => ErrorCategory::Storage,
            Self::Json(_) => ErrorCategory::Parsing,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
