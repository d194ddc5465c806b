//! Shared helpers for integration tests.

#![allow(dead_code)]

use callvault::prelude::*;
use callvault_storage::FaultInjectingStore;
use chrono::{DateTime, TimeZone, Utc};

/// Backend type used when a test needs to inject faults or inspect calls.
pub type Faulty = FaultInjectingStore<InMemoryStore>;

/// Install a test log subscriber once per binary.
///
/// Level comes from `CALLVAULT_TEST_LOG` (e.g. `debug`), default `warn`.
pub fn init_tracing() {
    let level = std::env::var("CALLVAULT_TEST_LOG")
        .ok()
        .and_then(|s| s.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_test_writer()
        .try_init();
}

/// Millisecond timestamp.
pub fn at(ms: u64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms as i64).unwrap()
}

/// A call whose id embeds its creation time.
pub fn call(app: &str, ms: u64, seq: u64, path: &str) -> CallRecord {
    CallRecord::new(CallId::from_parts(ms, seq), app, path, at(ms))
}

/// Vault over a fault-injecting in-memory backend.
pub fn faulty_vault(builder: CallVaultBuilder) -> (Arc<Faulty>, CallVault) {
    let backend = Arc::new(FaultInjectingStore::new(InMemoryStore::new()));
    let vault = builder.store(backend.clone()).open().unwrap();
    (backend, vault)
}

/// Ids of a list of calls, in order.
pub fn ids(calls: &[CallRecord]) -> Vec<CallId> {
    calls.iter().map(|c| c.id).collect()
}

/// Follow cursors to the end, returning every page.
pub fn collect_pages(vault: &CallVault, filter: CallFilter) -> Vec<CallPage> {
    let mut filter = filter;
    let mut pages = Vec::new();
    loop {
        let page = vault.calls.list(&filter).unwrap();
        let next = page.next_cursor;
        pages.push(page);
        match next {
            Some(cursor) => filter = filter.after(cursor),
            None => return pages,
        }
    }
}
