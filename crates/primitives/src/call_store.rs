//! CallStore: call records with a path index over a flat object store
//!
//! ## Design: STATELESS FACADE
//!
//! CallStore holds an `Arc<dyn ObjectStore>`, its options and a failure
//! counter. No caches, no locks: every operation is a short, bounded
//! sequence of backend calls and is safe to run concurrently.
//!
//! ## Write path (secondary index writer)
//!
//! ```text
//! 1. put calls/<app>/<desc-id>            full record   (failure => error)
//! 2. put markers/<app>/<path64>/<desc-id> empty object  (failure => policy)
//! ```
//!
//! The two writes are not atomic. A marker never exists unless its primary
//! write was attempted first, but a primary can exist without its marker:
//! after a tolerated marker failure, or when the operation is interrupted
//! between the writes. Such a call is readable by id and by app-wide
//! listing, and invisible to path-scoped listing.
//!
//! ## Read path
//!
//! `get_call` reads the primary key. Listing lives in [`crate::listing`].

use crate::options::{CallStoreOptions, MarkerFailurePolicy};
use callvault_core::keys::{self, encode_marker_key, encode_primary_key};
use callvault_core::{BackendError, CallId, CallRecord, Error, OpContext, Result};
use callvault_storage::ObjectStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Call storage primitive
///
/// Clones share the backend and the marker failure counter.
#[derive(Clone)]
pub struct CallStore {
    pub(crate) store: Arc<dyn ObjectStore>,
    pub(crate) options: CallStoreOptions,
    marker_failures: Arc<AtomicU64>,
}

impl CallStore {
    /// Create a call store with default options.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self::with_options(store, CallStoreOptions::default())
    }

    /// Create a call store with explicit options.
    pub fn with_options(store: Arc<dyn ObjectStore>, options: CallStoreOptions) -> Self {
        Self {
            store,
            options,
            marker_failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &CallStoreOptions {
        &self.options
    }

    /// Marker writes that failed and were tolerated since creation.
    pub fn marker_failures(&self) -> u64 {
        self.marker_failures.load(Ordering::Relaxed)
    }

    /// Store a call and index it by path.
    ///
    /// # Errors
    ///
    /// - `InvalidRecord` if the app id cannot be embedded in a key
    /// - backend errors from the primary write, unmodified
    /// - `IndexWrite` if the marker write fails under
    ///   [`MarkerFailurePolicy::Abort`]
    /// - `Interrupted` if `ctx` is cancelled or expires before either write
    pub fn insert_call(&self, ctx: &OpContext, call: &CallRecord) -> Result<()> {
        keys::validate_app_id(&call.app_id).map_err(Error::InvalidRecord)?;
        let body = call.to_bytes()?;

        let primary = encode_primary_key(&call.app_id, &call.id);
        ctx.check()?;
        debug!(key = %primary, bytes = body.len(), "Uploading call");
        self.store.put(ctx, &primary, &body)?;

        // The record is now readable by id. Everything below only affects
        // path-scoped listing.
        let marker = encode_marker_key(&call.app_id, &call.path, &call.id);
        ctx.check()?;
        debug!(key = %marker, "Uploading call marker");
        match self.store.put(ctx, &marker, &[]) {
            Ok(()) => Ok(()),
            Err(e) => self.marker_write_failed(call, marker, e),
        }
    }

    fn marker_write_failed(
        &self,
        call: &CallRecord,
        marker: String,
        e: BackendError,
    ) -> Result<()> {
        if let BackendError::Interrupted(i) = e {
            return Err(Error::Interrupted(i));
        }
        match self.options.marker_failure {
            MarkerFailurePolicy::Abort => Err(Error::IndexWrite {
                key: marker,
                source: e,
            }),
            MarkerFailurePolicy::Tolerate => {
                self.marker_failures.fetch_add(1, Ordering::Relaxed);
                warn!(
                    app_id = %call.app_id,
                    call_id = %call.id,
                    path = %call.path,
                    key = %marker,
                    error = %e,
                    "Marker write failed; call will be missing from path listings"
                );
                Ok(())
            }
        }
    }

    /// Fetch a call by app and id.
    ///
    /// Returns `NotFound` if no record exists at the primary key.
    pub fn get_call(&self, ctx: &OpContext, app_id: &str, id: &CallId) -> Result<CallRecord> {
        keys::validate_app_id(app_id).map_err(Error::InvalidRecord)?;
        let key = encode_primary_key(app_id, id);
        debug!(key = %key, "Downloading call");
        self.fetch(ctx, &key)
    }

    /// Read and decode the record at a primary key.
    pub(crate) fn fetch(&self, ctx: &OpContext, key: &str) -> Result<CallRecord> {
        ctx.check()?;
        let bytes = self.store.get(ctx, key)?;
        CallRecord::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for CallStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallStore")
            .field("options", &self.options)
            .field("marker_failures", &self.marker_failures())
            .finish()
    }
}
