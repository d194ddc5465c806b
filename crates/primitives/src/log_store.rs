//! LogStore: opaque per-call log payloads
//!
//! ## Design: STATELESS FACADE
//!
//! One object per call at `logs/<app>/<id>`. Logs are fetched by id only,
//! never listed, so the id is not descending-encoded. Writing a log does not
//! require the call record to exist.

use callvault_core::keys::{encode_log_key, validate_app_id};
use callvault_core::{CallId, Error, LogRecord, OpContext, Result};
use callvault_storage::ObjectStore;
use std::sync::Arc;
use tracing::debug;

/// Log storage primitive
#[derive(Clone)]
pub struct LogStore {
    store: Arc<dyn ObjectStore>,
}

impl LogStore {
    /// Create a log store over `store`.
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Store the log of a call, replacing any previous payload.
    pub fn insert_log(&self, ctx: &OpContext, log: &LogRecord) -> Result<()> {
        validate_app_id(&log.app_id).map_err(Error::InvalidRecord)?;
        let key = encode_log_key(&log.app_id, &log.call_id);
        ctx.check()?;
        debug!(key = %key, bytes = log.payload.len(), "Uploading log");
        self.store.put(ctx, &key, &log.payload)?;
        Ok(())
    }

    /// Fetch the log of a call.
    ///
    /// Returns `NotFound` if no log was stored for it.
    pub fn get_log(&self, ctx: &OpContext, app_id: &str, call_id: &CallId) -> Result<LogRecord> {
        validate_app_id(app_id).map_err(Error::InvalidRecord)?;
        let key = encode_log_key(app_id, call_id);
        ctx.check()?;
        debug!(key = %key, "Downloading log");
        let payload = self.store.get(ctx, &key)?;
        Ok(LogRecord::new(app_id, *call_id, payload))
    }
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore").finish_non_exhaustive()
    }
}
