//! Call listing filter and result page

use crate::error::{Error, Result};
use crate::keys::validate_app_id;
use crate::record::CallRecord;
use crate::types::CallId;
use chrono::{DateTime, Utc};

/// Selects one page of an app's calls.
///
/// `app_id` is mandatory: listing across apps is not supported by the key
/// layout. Time bounds are half-open, `from_time <= created_at < to_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFilter {
    /// Owning application (required)
    pub app_id: String,
    /// Restrict to calls made on this path
    pub path: Option<String>,
    /// Inclusive lower bound on `created_at`
    pub from_time: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created_at`
    pub to_time: Option<DateTime<Utc>>,
    /// Resume after this call id (exclusive)
    pub cursor: Option<CallId>,
    /// Maximum number of keys to scan for this page
    pub page_size: usize,
}

impl CallFilter {
    /// Filter over all of an app's calls.
    pub fn new(app_id: impl Into<String>, page_size: usize) -> Self {
        Self {
            app_id: app_id.into(),
            path: None,
            from_time: None,
            to_time: None,
            cursor: None,
            page_size,
        }
    }

    /// Restrict to one path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Only calls created at or after `t`.
    pub fn from_time(mut self, t: DateTime<Utc>) -> Self {
        self.from_time = Some(t);
        self
    }

    /// Only calls created strictly before `t`.
    pub fn to_time(mut self, t: DateTime<Utc>) -> Self {
        self.to_time = Some(t);
        self
    }

    /// Resume after a previous page's cursor.
    pub fn after(mut self, cursor: CallId) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Reject filters that cannot be served before touching the backend.
    pub fn validate(&self) -> Result<()> {
        if self.app_id.is_empty() {
            return Err(Error::InvalidFilter(
                "app id is required; listing across apps is not supported".to_string(),
            ));
        }
        validate_app_id(&self.app_id).map_err(Error::InvalidFilter)?;
        if self.page_size == 0 {
            return Err(Error::InvalidFilter("page size must be positive".to_string()));
        }
        if let (Some(from), Some(to)) = (self.from_time, self.to_time) {
            if from > to {
                return Err(Error::InvalidFilter(format!(
                    "from_time {from} is after to_time {to}"
                )));
            }
        }
        Ok(())
    }
}

/// One page of listed calls, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallPage {
    /// Matching records in newest-first order
    pub calls: Vec<CallRecord>,
    /// Cursor for the next page
    ///
    /// `None` once the namespace (or the time window) is exhausted. A page
    /// may be short, even empty, and still carry a cursor.
    pub next_cursor: Option<CallId>,
}

impl CallPage {
    /// Check whether another page may follow.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}
