//! Core identifier types
//!
//! - [`CallId`]: 16-byte, time-ordered call identifier

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of leading id bytes that carry the creation time.
pub const TIME_BYTES: usize = 6;

/// Largest millisecond value that fits in [`TIME_BYTES`].
pub const MAX_TIME_MILLIS: u64 = (1 << (8 * TIME_BYTES)) - 1;

/// Unique identifier for a call
///
/// The id is assigned by whoever creates the call. Its raw bytes sort in
/// creation order: the first [`TIME_BYTES`] bytes hold the creation time as
/// big-endian unix milliseconds (UUIDv7 layout), the rest breaks ties.
///
/// Key layout and time seeking rely on that ordering; ids that do not embed
/// a timestamp still round-trip, they just make time seeking useless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallId(Uuid);

impl CallId {
    /// Length of a call id in bytes.
    pub const LEN: usize = 16;

    /// Create a new time-ordered id for the current instant
    ///
    /// # Examples
    ///
    /// ```
    /// use callvault_core::CallId;
    ///
    /// let a = CallId::new();
    /// let b = CallId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        CallId(Uuid::now_v7())
    }

    /// Build a deterministic id from a millisecond timestamp and a sequence number
    ///
    /// Ids built this way order by `(millis, seq)`. `millis` is truncated to
    /// 48 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use callvault_core::CallId;
    ///
    /// let a = CallId::from_parts(1_000, 7);
    /// let b = CallId::from_parts(1_001, 0);
    /// assert!(a < b);
    /// assert_eq!(a.timestamp_millis(), 1_000);
    /// ```
    pub fn from_parts(millis: u64, seq: u64) -> Self {
        let mut bytes = [0u8; Self::LEN];
        bytes[..TIME_BYTES].copy_from_slice(&millis.to_be_bytes()[8 - TIME_BYTES..]);
        bytes[8..].copy_from_slice(&seq.to_be_bytes());
        CallId::from_bytes(bytes)
    }

    /// Create a CallId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        CallId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Milliseconds since the unix epoch embedded in the leading bytes.
    pub fn timestamp_millis(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[8 - TIME_BYTES..].copy_from_slice(&self.as_bytes()[..TIME_BYTES]);
        u64::from_be_bytes(buf)
    }

    /// Embedded creation time as a UTC timestamp.
    pub fn embedded_time(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp_millis()).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

impl Default for CallId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CallId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(CallId)
    }
}

impl From<Uuid> for CallId {
    fn from(uuid: Uuid) -> Self {
        CallId(uuid)
    }
}
