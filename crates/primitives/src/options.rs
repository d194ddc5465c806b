//! Call store behaviour switches.

use serde::{Deserialize, Serialize};

/// What `insert_call` does when the marker write fails.
///
/// The primary record is already durable at that point and readable by id;
/// only path-scoped listing misses the call. Neither policy retries.
///
/// | Policy | Caller sees | Diagnostic |
/// |--------|-------------|------------|
/// | `Abort` | `Error::IndexWrite` | error returned |
/// | `Tolerate` | `Ok(())` | `warn!` event + failure counter |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerFailurePolicy {
    /// Surface the marker failure to the caller.
    #[default]
    Abort,
    /// Log it, count it, and report success.
    Tolerate,
}

impl MarkerFailurePolicy {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerFailurePolicy::Abort => "abort",
            MarkerFailurePolicy::Tolerate => "tolerate",
        }
    }
}

impl std::fmt::Display for MarkerFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default ceiling on keys scanned per page (S3 `MaxKeys`).
pub const DEFAULT_MAX_PAGE_SIZE: usize = 1000;

/// Options for a [`CallStore`](crate::CallStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallStoreOptions {
    /// Marker write failure handling
    pub marker_failure: MarkerFailurePolicy,
    /// Stop a scan once listed ids are older than `from_time`.
    ///
    /// Turn off when ids are not generated with their creation time in the
    /// leading bytes; listings then read to the end of the namespace and rely
    /// only on the per-record time check.
    pub time_seek: bool,
    /// Start a scan at `to_time` instead of the namespace root.
    ///
    /// Skips every id whose embedded time is after `to_time`'s
    /// millisecond without fetching it. A record whose `created_at` is older
    /// than its id's embedded time can be skipped wrongly, so this is off
    /// unless ids are known to embed `created_at`.
    pub seek_to_time: bool,
    /// Upper bound applied to every requested page size
    pub max_page_size: usize,
}

impl Default for CallStoreOptions {
    fn default() -> Self {
        Self {
            marker_failure: MarkerFailurePolicy::default(),
            time_seek: true,
            seek_to_time: false,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
