//! Key codec
//!
//! Maps records onto a flat, lexicographically sorted object namespace.
//!
//! ```text
//! calls/<app>/<desc-id>                 primary record (full CallRecord)
//! markers/<app>/<path64>/<desc-id>      empty marker, secondary index by path
//! logs/<app>/<id>                       opaque log payload
//! ```
//!
//! - `<desc-id>` is the call id after [`encode_descending`], rendered as 32
//!   lowercase hex digits. Hex keeps byte order, so an ascending listing of a
//!   namespace yields newest calls first.
//! - `<path64>` is the path in unpadded URL-safe base64. Paths routinely
//!   contain `/`, the key separator.
//! - App ids must be non-empty and must not contain `/`.
//!
//! Decoding is strict: wrong field count, unknown namespace, or a malformed
//! id fragment is an [`Error::InvalidKey`]. Foreign objects sharing a prefix
//! must surface, not be silently reinterpreted.

use crate::descending::{encode_descending, invert_in_place};
use crate::error::{Error, Result};
use crate::types::CallId;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Key separator.
pub const SEPARATOR: char = '/';

/// Namespace holding primary call records.
pub const CALLS_PREFIX: &str = "calls";

/// Namespace holding path markers.
pub const MARKERS_PREFIX: &str = "markers";

/// Namespace holding log payloads.
pub const LOGS_PREFIX: &str = "logs";

/// Length of a rendered id fragment.
pub const ID_FRAGMENT_LEN: usize = CallId::LEN * 2;

/// Key namespaces understood by [`decode_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySpace {
    /// `calls/<app>/<desc-id>`
    Calls,
    /// `markers/<app>/<path64>/<desc-id>`
    Markers,
}

impl KeySpace {
    /// Leading key segment for this namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            KeySpace::Calls => CALLS_PREFIX,
            KeySpace::Markers => MARKERS_PREFIX,
        }
    }

    /// Number of `/`-separated fields in a key of this namespace.
    pub fn field_count(&self) -> usize {
        match self {
            KeySpace::Calls => 3,
            KeySpace::Markers => 4,
        }
    }
}

/// Check that an app id can be embedded in a key.
pub fn validate_app_id(app: &str) -> std::result::Result<(), String> {
    if app.is_empty() {
        return Err("app id is empty".to_string());
    }
    if app.contains(SEPARATOR) {
        return Err(format!("app id {app:?} contains the key separator"));
    }
    Ok(())
}

/// Render a call id as its descending key fragment.
pub fn descending_fragment(id: &CallId) -> String {
    hex::encode(encode_descending(id.as_bytes()))
}

/// Parse a descending key fragment back into a call id.
///
/// Only the lowercase rendering is accepted, so one id has exactly one key.
pub fn parse_descending_fragment(fragment: &str) -> Option<CallId> {
    if fragment.len() != ID_FRAGMENT_LEN || fragment.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }
    let mut bytes = [0u8; CallId::LEN];
    hex::decode_to_slice(fragment, &mut bytes).ok()?;
    invert_in_place(&mut bytes);
    Some(CallId::from_bytes(bytes))
}

/// Escape a path so it can be used as a single key segment.
pub fn escape_path(path: &str) -> String {
    URL_SAFE_NO_PAD.encode(path.as_bytes())
}

/// Reverse [`escape_path`].
pub fn unescape_path(segment: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    String::from_utf8(bytes).ok()
}

/// Listing root for an app's primary records: `calls/<app>/`.
pub fn calls_root(app: &str) -> String {
    format!("{CALLS_PREFIX}/{app}/")
}

/// Listing root for an app's markers under one path: `markers/<app>/<path64>/`.
pub fn markers_root(app: &str, path: &str) -> String {
    format!("{MARKERS_PREFIX}/{app}/{}/", escape_path(path))
}

/// Primary key of a call record.
///
/// # Examples
///
/// ```
/// use callvault_core::keys::{decode_key, encode_primary_key, KeySpace};
/// use callvault_core::CallId;
///
/// let id = CallId::from_parts(1_000, 1);
/// let key = encode_primary_key("a1", &id);
/// assert!(key.starts_with("calls/a1/"));
/// assert_eq!(decode_key(&key, KeySpace::Calls).unwrap(), ("a1".to_string(), id));
/// ```
pub fn encode_primary_key(app: &str, id: &CallId) -> String {
    format!("{}{}", calls_root(app), descending_fragment(id))
}

/// Marker key indexing a call under its path.
pub fn encode_marker_key(app: &str, path: &str, id: &CallId) -> String {
    format!("{}{}", markers_root(app, path), descending_fragment(id))
}

/// Key of a call's log payload.
///
/// Log ids are not descending-encoded: logs are only fetched by id.
pub fn encode_log_key(app: &str, id: &CallId) -> String {
    format!("{LOGS_PREFIX}/{app}/{}", hex::encode(id.as_bytes()))
}

/// Decode a listed key into `(app, id)` under the expected namespace.
pub fn decode_key(raw: &str, space: KeySpace) -> Result<(String, CallId)> {
    let fields: Vec<&str> = raw.split(SEPARATOR).collect();
    if fields.len() != space.field_count() {
        return Err(Error::invalid_key(
            raw,
            format!(
                "expected {} fields for {} key, found {}",
                space.field_count(),
                space.prefix(),
                fields.len()
            ),
        ));
    }
    if fields[0] != space.prefix() {
        return Err(Error::invalid_key(
            raw,
            format!("expected namespace {:?}, found {:?}", space.prefix(), fields[0]),
        ));
    }

    let app = fields[1];
    validate_app_id(app).map_err(|reason| Error::invalid_key(raw, reason))?;

    if space == KeySpace::Markers && unescape_path(fields[2]).is_none() {
        return Err(Error::invalid_key(raw, "path segment is not valid base64"));
    }

    let fragment = fields[fields.len() - 1];
    let id = parse_descending_fragment(fragment).ok_or_else(|| {
        Error::invalid_key(
            raw,
            format!("id fragment must be {ID_FRAGMENT_LEN} lowercase hex digits"),
        )
    })?;

    Ok((app.to_string(), id))
}
