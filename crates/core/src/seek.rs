//! Time-to-prefix seek
//!
//! Call ids carry their creation time in the leading [`TIME_BYTES`] bytes,
//! so a time bound can be turned into a partial, descending-encoded key
//! fragment and used to skip part of a namespace scan.
//!
//! This is pruning, not filtering. The fragment only knows the time embedded
//! in ids; the list engine re-checks every fetched record's `created_at`.
//! A bound that cannot be expressed in the id time range yields `None` and
//! the caller scans from the namespace root instead.

use crate::keys::descending_fragment;
use crate::types::{CallId, MAX_TIME_MILLIS, TIME_BYTES};
use chrono::{DateTime, Utc};

/// Length of the time-carrying part of a rendered id fragment.
pub const TIME_FRAGMENT_LEN: usize = TIME_BYTES * 2;

/// Millisecond value a time bound maps to in id space.
///
/// `None` if the bound is before the epoch or beyond the 48-bit range.
pub fn bound_millis(t: DateTime<Utc>) -> Option<u64> {
    let millis = u64::try_from(t.timestamp_millis()).ok()?;
    (millis <= MAX_TIME_MILLIS).then_some(millis)
}

/// Build the time-carrying prefix of a descending key fragment.
///
/// Every id whose embedded millisecond equals `t`'s has a fragment starting
/// with the returned string; ids from later milliseconds sort before it and
/// ids from earlier milliseconds sort after it.
///
/// # Examples
///
/// ```
/// use callvault_core::seek::time_fragment;
/// use callvault_core::keys::descending_fragment;
/// use callvault_core::CallId;
/// use chrono::{TimeZone, Utc};
///
/// let t = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
/// let frag = time_fragment(t).unwrap();
/// let id = CallId::from_parts(1_700_000_000_123, 99);
/// assert!(descending_fragment(&id).starts_with(&frag));
/// ```
pub fn time_fragment(t: DateTime<Utc>) -> Option<String> {
    let millis = bound_millis(t)?;
    let mut fragment = descending_fragment(&CallId::from_parts(millis, 0));
    fragment.truncate(TIME_FRAGMENT_LEN);
    Some(fragment)
}
