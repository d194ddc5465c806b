//! File-based configuration.
//!
//! ```toml
//! marker_failure = "tolerate"   # or "abort" (default)
//! time_seek = true
//! seek_to_time = false
//! max_page_size = 1000
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use crate::error::{Error, Result};
use callvault_primitives::{CallStoreOptions, MarkerFailurePolicy, DEFAULT_MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Call store configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Marker write failure handling
    pub marker_failure: MarkerFailurePolicy,
    /// Stop scans at `from_time` using id-embedded time
    pub time_seek: bool,
    /// Start scans at `to_time` using id-embedded time
    pub seek_to_time: bool,
    /// Ceiling on requested page sizes
    pub max_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::from(CallStoreOptions::default())
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject values the call store cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_page_size == 0 {
            return Err(Error::Config("max_page_size must be positive".to_string()));
        }
        Ok(())
    }

    /// Options for the call store.
    pub fn options(&self) -> CallStoreOptions {
        CallStoreOptions {
            marker_failure: self.marker_failure,
            time_seek: self.time_seek,
            seek_to_time: self.seek_to_time,
            max_page_size: self.max_page_size,
        }
    }
}

impl From<CallStoreOptions> for Config {
    fn from(opts: CallStoreOptions) -> Self {
        Self {
            marker_failure: opts.marker_failure,
            time_seek: opts.time_seek,
            seek_to_time: opts.seek_to_time,
            max_page_size: opts.max_page_size,
        }
    }
}
