//! Error types shared by every callvault layer
//!
//! Two levels:
//! - [`BackendError`]: what an object store adapter reports
//! - [`Error`]: what the codec, index writer and list engine report
//!
//! Backend failures are never retried here. They are classified once
//! (`NotFound`, interruption, everything else) and handed to the caller.

use crate::context::Interrupted;
use thiserror::Error;

/// Failure reported by an object store adapter.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No object exists at the requested key
    #[error("object not found: {key}")]
    NotFound {
        /// Key that was requested
        key: String,
    },

    /// The operation context was cancelled or ran past its deadline
    #[error("backend call interrupted: {0}")]
    Interrupted(#[from] Interrupted),

    /// Any other I/O failure; the cause is opaque to this layer
    #[error("backend failure: {message}")]
    Failure {
        /// Human-readable description
        message: String,
        /// Underlying cause, if the adapter has one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl BackendError {
    /// Create an opaque failure without an underlying cause.
    pub fn failure(message: impl Into<String>) -> Self {
        BackendError::Failure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an opaque failure wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BackendError::Failure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Check if this is a missing-object error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BackendError::NotFound { .. })
    }
}

/// Errors produced by the key codec, the index writer and the list engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested record is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Query filter is unusable (missing app id, zero page size, ...)
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A stored key does not match the namespace schema
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey {
        /// The raw key as returned by the backend
        key: String,
        /// What failed to decode
        reason: String,
    },

    /// A record cannot be written under the key layout
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The marker write failed after the primary record became durable
    #[error("secondary index write failed for {key}: {source}")]
    IndexWrite {
        /// Marker key that could not be written
        key: String,
        /// Backend failure
        #[source]
        source: BackendError,
    },

    /// Record payload could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The operation context was cancelled or ran past its deadline
    #[error("interrupted: {0}")]
    Interrupted(#[from] Interrupted),

    /// Any other backend failure, unmodified
    #[error(transparent)]
    Backend(BackendError),
}

/// Result type for callvault core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an [`Error::InvalidKey`] for a raw key.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<BackendError> for Error {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotFound { key } => Error::NotFound(key),
            BackendError::Interrupted(i) => Error::Interrupted(i),
            other => Error::Backend(other),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
