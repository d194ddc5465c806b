//! Stored record types
//!
//! - [`CallRecord`]: one call, stored at its primary key and indexed by path
//! - [`LogRecord`]: opaque log bytes for one call, no secondary index

use crate::error::Result;
use crate::types::CallId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A call as stored in the object namespace.
///
/// Only the four addressing fields are interpreted here. Everything else
/// the calling system tracks travels in `body` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Call identifier (time-ordered)
    pub id: CallId,
    /// Owning application
    pub app_id: String,
    /// Route path the call was made on
    pub path: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Opaque remainder owned by the calling system
    #[serde(default)]
    pub body: serde_json::Value,
}

impl CallRecord {
    /// Create a record with an empty body.
    pub fn new(
        id: CallId,
        app_id: impl Into<String>,
        path: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            app_id: app_id.into(),
            path: path.into(),
            created_at,
            body: serde_json::Value::Null,
        }
    }

    /// Replace the opaque body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = body;
        self
    }

    /// Serialize for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize a stored record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Log output of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Owning application
    pub app_id: String,
    /// Call the log belongs to
    pub call_id: CallId,
    /// Raw log bytes
    pub payload: Vec<u8>,
}

impl LogRecord {
    /// Create a log record.
    pub fn new(app_id: impl Into<String>, call_id: CallId, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            app_id: app_id.into(),
            call_id,
            payload: payload.into(),
        }
    }
}
