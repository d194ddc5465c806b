//! Unified error types for callvault.
//!
//! This module provides a clean error type that wraps internal errors
//! and presents a consistent interface to users.

use thiserror::Error;

/// All callvault errors.
///
/// This is the canonical error type for all public operations. Internal
/// error detail is flattened into messages.
#[derive(Debug, Error)]
pub enum Error {
    /// Call or log not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Listing filter cannot be served
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A stored key does not match the namespace layout
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Record cannot be stored (e.g. app id unusable in a key)
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Call stored, but its path marker could not be written
    #[error("index write failed: {0}")]
    IndexWrite(String),

    /// Operation was cancelled or exceeded its deadline
    #[error("interrupted: {0}")]
    Interrupted(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Object store error
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type for callvault operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error may succeed on retry.
    ///
    /// Backend failures and interruptions are transient from the caller's
    /// point of view; an `IndexWrite` retry rewrites both objects.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Storage(_) | Error::Interrupted(_) | Error::IndexWrite(_)
        )
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an invalid filter error.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, Error::InvalidFilter(_))
    }

    /// Check if the namespace holds data that does not decode.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::InvalidKey(_))
    }

    /// Check if this is a cancellation or deadline error.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Error::Interrupted(_))
    }
}

// Convert from internal core errors
impl From<callvault_core::Error> for Error {
    fn from(e: callvault_core::Error) -> Self {
        use callvault_core::Error as CoreError;
        match e {
            CoreError::NotFound(key) => Error::NotFound(key),
            CoreError::InvalidFilter(msg) => Error::InvalidFilter(msg),
            e @ CoreError::InvalidKey { .. } => Error::InvalidKey(e.to_string()),
            CoreError::InvalidRecord(msg) => Error::InvalidRecord(msg),
            CoreError::IndexWrite { key, source } => {
                Error::IndexWrite(format!("{}: {}", key, source))
            }
            CoreError::Serialization(msg) => Error::Serialization(msg),
            CoreError::Interrupted(i) => Error::Interrupted(i.to_string()),
            CoreError::Backend(e) => Error::Storage(e.to_string()),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

// Convert from toml errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
