//! Log primitive.

use crate::error::Result;
use crate::types::{CallId, LogRecord, OpContext};
use callvault_primitives::LogStore;

/// Log operations.
///
/// Access via `vault.logs`.
#[derive(Debug, Clone)]
pub struct Logs {
    store: LogStore,
}

impl Logs {
    pub(crate) fn new(store: LogStore) -> Self {
        Self { store }
    }

    /// Store the log output of a call.
    pub fn insert(&self, app_id: &str, call_id: &CallId, payload: impl Into<Vec<u8>>) -> Result<()> {
        self.insert_with(&OpContext::background(), app_id, call_id, payload)
    }

    /// Fetch the log output of a call.
    pub fn get(&self, app_id: &str, call_id: &CallId) -> Result<Vec<u8>> {
        self.get_with(&OpContext::background(), app_id, call_id)
    }

    /// Store a call log under a context.
    pub fn insert_with(
        &self,
        ctx: &OpContext,
        app_id: &str,
        call_id: &CallId,
        payload: impl Into<Vec<u8>>,
    ) -> Result<()> {
        let log = LogRecord::new(app_id, *call_id, payload);
        Ok(self.store.insert_log(ctx, &log)?)
    }

    /// Fetch a call log under a context.
    pub fn get_with(&self, ctx: &OpContext, app_id: &str, call_id: &CallId) -> Result<Vec<u8>> {
        Ok(self.store.get_log(ctx, app_id, call_id)?.payload)
    }
}
