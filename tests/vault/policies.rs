//! Marker failure policies and what each leaves visible.

use crate::common::*;
use callvault::prelude::*;

fn visibility(vault: &CallVault, call: &CallRecord) -> (bool, bool, bool) {
    let by_id = vault.calls.get(&call.app_id, &call.id).is_ok();
    let in_app = vault
        .calls
        .list_all(&CallFilter::new(call.app_id.clone(), 10))
        .unwrap()
        .iter()
        .any(|c| c.id == call.id);
    let in_path = vault
        .calls
        .list_all(&CallFilter::new(call.app_id.clone(), 10).path(call.path.clone()))
        .unwrap()
        .iter()
        .any(|c| c.id == call.id);
    (by_id, in_app, in_path)
}

#[test]
fn test_abort_policy_reports_index_failure() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    backend.fail_puts_with_prefix("markers/");
    let c = call("a1", 1_000, 0, "/f");

    let err = vault.calls.insert(&c).unwrap_err();
    assert!(matches!(err, Error::IndexWrite(_)));
    assert!(err.is_retryable());
    assert_eq!(visibility(&vault, &c), (true, true, false));
    assert_eq!(vault.calls.marker_failures(), 0);
}

#[test]
fn test_abort_retry_repairs_index() {
    let (backend, vault) = faulty_vault(CallVault::builder());
    backend.fail_puts_with_prefix("markers/");
    let c = call("a1", 1_000, 0, "/f");
    assert!(vault.calls.insert(&c).is_err());

    backend.heal();
    vault.calls.insert(&c).unwrap();
    assert_eq!(visibility(&vault, &c), (true, true, true));
}

#[test]
fn test_tolerate_policy_reports_success() {
    init_tracing();
    let (backend, vault) = faulty_vault(CallVault::builder().tolerate_marker_failures());
    backend.fail_puts_with_prefix("markers/");
    let c = call("a1", 1_000, 0, "/f");

    vault.calls.insert(&c).unwrap();
    assert_eq!(vault.calls.marker_failures(), 1);
    assert_eq!(visibility(&vault, &c), (true, true, false));
}

#[test]
fn test_primary_failure_fails_under_either_policy() {
    for builder in [CallVault::builder(), CallVault::builder().tolerate_marker_failures()] {
        let (backend, vault) = faulty_vault(builder);
        backend.fail_puts_with_prefix("calls/");
        let c = call("a1", 1_000, 0, "/f");

        let err = vault.calls.insert(&c).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(visibility(&vault, &c), (false, false, false));
        // the marker was never attempted
        assert_eq!(backend.inner().len(), 0);
    }
}

#[test]
fn test_invalid_app_is_rejected() {
    let vault = CallVault::in_memory();
    let err = vault.calls.insert(&call("a/1", 1_000, 0, "/f")).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord(_)));
}

#[test]
fn test_get_unknown_call() {
    let vault = CallVault::in_memory();
    assert!(vault
        .calls
        .get("a1", &CallId::from_parts(1, 1))
        .unwrap_err()
        .is_not_found());
}
