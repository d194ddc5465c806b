//! Bad input and inconsistent namespaces.

use crate::common::*;
use callvault::prelude::*;
use callvault_core::keys;

// =============================================================================
// INVALID FILTERS
// =============================================================================

#[test]
fn test_invalid_filters_issue_no_io() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    let filters = vec![
        CallFilter::new("", 10),
        CallFilter::new("a/1", 10),
        CallFilter::new("a1", 0),
        CallFilter::new("a1", 10).from_time(at(2_000)).to_time(at(1_000)),
    ];

    for filter in filters {
        let err = vault.calls.list(&filter).unwrap_err();
        assert!(err.is_invalid_filter(), "{filter:?} gave {err}");
    }
    assert!(backend.journal().is_empty());
}

// =============================================================================
// CORRUPTED NAMESPACE
// =============================================================================

#[test]
fn test_foreign_object_is_reported() {
    init_tracing();
    let (backend, vault) = faulty_vault(CallVault::builder());
    vault.calls.insert(&call("a1", 1_000, 0, "/f")).unwrap();
    backend.inject_listed_key("calls/a1/README.txt");

    let err = vault.calls.list(&CallFilter::new("a1", 10)).unwrap_err();
    assert!(err.is_corruption());
    assert!(err.to_string().contains("README.txt"));
}

#[test]
fn test_uppercase_fragment_is_reported() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    let id = CallId::from_parts(1_000, 0);
    let upper = keys::encode_marker_key("a1", "/f", &id).to_uppercase();
    let root = keys::markers_root("a1", "/f");
    backend.inject_listed_key(format!("{root}{}", &upper[upper.len() - 32..]));

    let err = vault.calls.list(&CallFilter::new("a1", 10).path("/f")).unwrap_err();
    assert!(err.is_corruption());
}

#[test]
fn test_nested_object_is_reported() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    let id = CallId::from_parts(1_000, 0);
    backend.inject_listed_key(format!("calls/a1/x/{}", keys::descending_fragment(&id)));

    let err = vault.calls.list(&CallFilter::new("a1", 10)).unwrap_err();
    assert!(err.is_corruption());
}

// =============================================================================
// INCONSISTENT INDEX
// =============================================================================

#[test]
fn test_vanished_record_is_skipped_but_advances_cursor() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    let kept = call("a1", 1_000, 0, "/f");
    let gone = call("a1", 2_000, 0, "/f");
    vault.calls.insert(&kept).unwrap();
    vault.calls.insert(&gone).unwrap();
    backend
        .inner()
        .remove(&keys::encode_primary_key("a1", &gone.id));

    let first = vault.calls.list(&CallFilter::new("a1", 1).path("/f")).unwrap();
    assert!(first.calls.is_empty());
    assert_eq!(first.next_cursor, Some(gone.id));

    let rest = vault
        .calls
        .list_all(&CallFilter::new("a1", 1).path("/f").after(gone.id))
        .unwrap();
    assert_eq!(ids(&rest), vec![kept.id]);
}

#[test]
fn test_backend_list_failure_propagates() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    backend.fail_lists();

    let err = vault.calls.list(&CallFilter::new("a1", 10)).unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert!(err.is_retryable());

    backend.heal();
    assert!(vault.calls.list(&CallFilter::new("a1", 10)).is_ok());
}

#[test]
fn test_backend_fetch_failure_propagates() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    vault.calls.insert(&call("a1", 1_000, 0, "/f")).unwrap();
    backend.fail_gets_with_prefix("calls/a1/");

    let err = vault.calls.list(&CallFilter::new("a1", 10)).unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
}
