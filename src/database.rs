//! Main entry point for callvault.
//!
//! This module provides the `CallVault` struct, which binds the call and log
//! primitives to one object store.

use crate::config::Config;
use crate::error::Result;
use crate::primitives::{Calls, Logs};
use crate::types::{CallStoreOptions, InMemoryStore, MarkerFailurePolicy, ObjectStore};
use callvault_primitives::{CallStore, LogStore};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// A call and log store over one object namespace.
///
/// Create one with [`CallVault::in_memory`] or [`CallVault::builder`].
///
/// # Example
///
/// ```ignore
/// use callvault::prelude::*;
///
/// let vault = CallVault::builder()
///     .store(Arc::new(my_s3_adapter))
///     .tolerate_marker_failures()
///     .open()?;
///
/// vault.calls.insert(&call)?;
/// vault.logs.insert("a1", &call.id, log_bytes)?;
/// ```
pub struct CallVault {
    store: Arc<dyn ObjectStore>,
    options: CallStoreOptions,

    /// Call operations
    pub calls: Calls,

    /// Log operations
    pub logs: Logs,
}

impl CallVault {
    /// Open a vault over a fresh, empty in-memory store with default options.
    ///
    /// Data is lost when the vault is dropped. Use for tests and tooling.
    pub fn in_memory() -> Self {
        Self::from_parts(Arc::new(InMemoryStore::new()), CallStoreOptions::default())
    }

    /// Create a builder for vault configuration.
    pub fn builder() -> CallVaultBuilder {
        CallVaultBuilder::new()
    }

    /// Options in effect.
    pub fn options(&self) -> &CallStoreOptions {
        &self.options
    }

    /// The underlying object store.
    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }

    fn from_parts(store: Arc<dyn ObjectStore>, options: CallStoreOptions) -> Self {
        Self {
            calls: Calls::new(CallStore::with_options(store.clone(), options)),
            logs: Logs::new(LogStore::new(store.clone())),
            store,
            options,
        }
    }
}

impl fmt::Debug for CallVault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallVault")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for vault configuration.
///
/// # Example
///
/// ```
/// use callvault::prelude::*;
///
/// let vault = CallVault::builder()
///     .tolerate_marker_failures()
///     .max_page_size(200)
///     .open()?;
/// assert_eq!(vault.options().marker_failure, MarkerFailurePolicy::Tolerate);
/// # Ok::<(), callvault::Error>(())
/// ```
pub struct CallVaultBuilder {
    store: Option<Arc<dyn ObjectStore>>,
    config: Config,
}

impl CallVaultBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            store: None,
            config: Config::default(),
        }
    }

    /// Set the object store. Defaults to a fresh in-memory store.
    pub fn store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace all settings with a loaded configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load settings from a TOML file.
    pub fn config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        Ok(self.config(Config::from_file(path)?))
    }

    /// Set the marker write failure policy.
    pub fn marker_failure(mut self, policy: MarkerFailurePolicy) -> Self {
        self.config.marker_failure = policy;
        self
    }

    /// Report success when a marker write fails (logged and counted).
    pub fn tolerate_marker_failures(self) -> Self {
        self.marker_failure(MarkerFailurePolicy::Tolerate)
    }

    /// Enable or disable stopping scans at `from_time`.
    pub fn time_seek(mut self, enabled: bool) -> Self {
        self.config.time_seek = enabled;
        self
    }

    /// Start scans at `to_time` instead of the newest id.
    ///
    /// Only safe when ids embed their record's `created_at`; off by default.
    pub fn seek_to_time(mut self, enabled: bool) -> Self {
        self.config.seek_to_time = enabled;
        self
    }

    /// Set the ceiling applied to requested page sizes.
    pub fn max_page_size(mut self, n: usize) -> Self {
        self.config.max_page_size = n;
        self
    }

    /// Open the vault.
    ///
    /// Fails with a configuration error if the settings are invalid.
    pub fn open(self) -> Result<CallVault> {
        self.config.validate()?;
        let options = self.config.options();
        debug!(
            marker_failure = %options.marker_failure,
            time_seek = options.time_seek,
            seek_to_time = options.seek_to_time,
            max_page_size = options.max_page_size,
            "Opening call vault"
        );
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryStore::new()) as Arc<dyn ObjectStore>);
        Ok(CallVault::from_parts(store, options))
    }
}

impl Default for CallVaultBuilder {
    fn default() -> Self {
        Self::new()
    }
}
