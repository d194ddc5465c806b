//! Cancellation and deadlines.

use crate::common::*;
use callvault::prelude::*;
use std::time::{Duration, Instant};

#[test]
fn test_cancelled_context_issues_no_io() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    let (ctx, handle) = OpContext::background().cancellable();
    handle.cancel();

    let c = call("a1", 1_000, 0, "/f");
    assert!(vault.calls.insert_with(&ctx, &c).unwrap_err().is_interrupted());
    assert!(vault
        .calls
        .list_with(&ctx, &CallFilter::new("a1", 10))
        .unwrap_err()
        .is_interrupted());
    assert!(vault.logs.get_with(&ctx, "a1", &c.id).unwrap_err().is_interrupted());
    assert!(backend.journal().is_empty());
}

#[test]
fn test_expired_deadline() {
    let vault = CallVault::in_memory();
    let ctx = OpContext::background().deadline(Instant::now());

    let err = vault.calls.list_with(&ctx, &CallFilter::new("a1", 10)).unwrap_err();
    assert!(err.is_interrupted());
    assert!(err.is_retryable());
}

#[test]
fn test_generous_deadline_completes() {
    let vault = CallVault::in_memory();
    let ctx = OpContext::with_timeout(Duration::from_secs(60));
    let c = call("a1", 1_000, 0, "/f");

    vault.calls.insert_with(&ctx, &c).unwrap();
    assert_eq!(vault.calls.get_with(&ctx, "a1", &c.id).unwrap(), c);
    assert_eq!(
        vault.calls.list_all_with(&ctx, &CallFilter::new("a1", 1)).unwrap(),
        vec![c]
    );
}

#[test]
fn test_cancel_between_writes_leaves_unindexed_call() {
    let (backend, vault) = faulty_vault(CallVault::builder().tolerate_marker_failures());
    let (ctx, handle) = OpContext::background().cancellable();
    backend.before_put(move |key| {
        if key.starts_with("markers/") {
            handle.cancel();
        }
    });

    let c = call("a1", 1_000, 0, "/f");
    assert!(vault.calls.insert_with(&ctx, &c).unwrap_err().is_interrupted());
    // interruption is not a tolerated marker failure
    assert_eq!(vault.calls.marker_failures(), 0);

    assert_eq!(vault.calls.get("a1", &c.id).unwrap(), c);
    let by_path = vault.calls.list(&CallFilter::new("a1", 10).path("/f")).unwrap();
    assert!(by_path.calls.is_empty());
}
