//! Call primitive.
//!
//! Stores call records and lists them newest first, per app or per path.
//!
//! # Example
//!
//! ```
//! use callvault::prelude::*;
//! use chrono::Utc;
//!
//! let vault = CallVault::in_memory();
//! let call = CallRecord::new(CallId::new(), "a1", "/hello", Utc::now());
//! vault.calls.insert(&call)?;
//!
//! let page = vault.calls.list(&CallFilter::new("a1", 50).path("/hello"))?;
//! assert_eq!(page.calls, vec![call]);
//! # Ok::<(), callvault::Error>(())
//! ```

use crate::error::Result;
use crate::types::{CallFilter, CallId, CallPage, CallRecord, OpContext};
use callvault_primitives::CallStore;

/// Call operations.
///
/// Access via `vault.calls`.
#[derive(Debug, Clone)]
pub struct Calls {
    store: CallStore,
}

impl Calls {
    pub(crate) fn new(store: CallStore) -> Self {
        Self { store }
    }

    // =========================================================================
    // Simple API (background context)
    // =========================================================================

    /// Store a call and index it under its path.
    ///
    /// If the path marker cannot be written, the outcome depends on the
    /// configured [`MarkerFailurePolicy`](crate::MarkerFailurePolicy); the
    /// call itself is stored either way.
    pub fn insert(&self, call: &CallRecord) -> Result<()> {
        self.insert_with(&OpContext::background(), call)
    }

    /// Fetch a call by id.
    pub fn get(&self, app_id: &str, id: &CallId) -> Result<CallRecord> {
        self.get_with(&OpContext::background(), app_id, id)
    }

    /// List one page of calls.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut filter = CallFilter::new("a1", 100);
    /// loop {
    ///     let page = vault.calls.list(&filter)?;
    ///     handle(page.calls);
    ///     match page.next_cursor {
    ///         Some(cursor) => filter = filter.after(cursor),
    ///         None => break,
    ///     }
    /// }
    /// ```
    pub fn list(&self, filter: &CallFilter) -> Result<CallPage> {
        self.list_with(&OpContext::background(), filter)
    }

    /// List every matching call, following cursors to the end.
    pub fn list_all(&self, filter: &CallFilter) -> Result<Vec<CallRecord>> {
        self.list_all_with(&OpContext::background(), filter)
    }

    // =========================================================================
    // Context-bound API
    // =========================================================================

    /// Store a call under a cancellation/deadline context.
    ///
    /// Interruption after the record is written leaves it without its path
    /// marker.
    pub fn insert_with(&self, ctx: &OpContext, call: &CallRecord) -> Result<()> {
        Ok(self.store.insert_call(ctx, call)?)
    }

    /// Fetch a call under a context.
    pub fn get_with(&self, ctx: &OpContext, app_id: &str, id: &CallId) -> Result<CallRecord> {
        Ok(self.store.get_call(ctx, app_id, id)?)
    }

    /// List one page of calls under a context.
    pub fn list_with(&self, ctx: &OpContext, filter: &CallFilter) -> Result<CallPage> {
        Ok(self.store.list_calls(ctx, filter)?)
    }

    /// List every matching call under a context.
    pub fn list_all_with(&self, ctx: &OpContext, filter: &CallFilter) -> Result<Vec<CallRecord>> {
        Ok(self.store.list_all_calls(ctx, filter)?)
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Marker writes that failed and were tolerated.
    pub fn marker_failures(&self) -> u64 {
        self.store.marker_failures()
    }
}
