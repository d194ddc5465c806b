//! Namespace isolation: apps and paths never leak into each other's listings.

use crate::common::*;
use callvault::prelude::*;

#[test]
fn test_app_prefix_does_not_leak() {
    let vault = CallVault::in_memory();
    let mine = call("a1", 1_000, 0, "/f");
    let other = call("a10", 2_000, 0, "/f");
    vault.calls.insert(&mine).unwrap();
    vault.calls.insert(&other).unwrap();

    let page = vault.calls.list(&CallFilter::new("a1", 10)).unwrap();
    assert_eq!(ids(&page.calls), vec![mine.id]);

    let page = vault.calls.list(&CallFilter::new("a1", 10).path("/f")).unwrap();
    assert_eq!(ids(&page.calls), vec![mine.id]);
}

#[test]
fn test_path_prefix_does_not_leak() {
    let vault = CallVault::in_memory();
    let f = call("a1", 1_000, 0, "/f");
    let fo = call("a1", 2_000, 0, "/fo");
    let nested = call("a1", 3_000, 0, "/f/g");
    for c in [&f, &fo, &nested] {
        vault.calls.insert(c).unwrap();
    }

    for (path, expected) in [("/f", f.id), ("/fo", fo.id), ("/f/g", nested.id)] {
        let page = vault.calls.list(&CallFilter::new("a1", 10).path(path)).unwrap();
        assert_eq!(ids(&page.calls), vec![expected], "path {path}");
    }
}

#[test]
fn test_app_listing_spans_paths() {
    let vault = CallVault::in_memory();
    let a = call("a1", 1_000, 0, "/a");
    let b = call("a1", 2_000, 0, "/b");
    vault.calls.insert(&a).unwrap();
    vault.calls.insert(&b).unwrap();

    let page = vault.calls.list(&CallFilter::new("a1", 10)).unwrap();
    assert_eq!(ids(&page.calls), vec![b.id, a.id]);
}

#[test]
fn test_awkward_paths_are_indexed() {
    let vault = CallVault::in_memory();
    let paths = ["/", "", "/with space", "/ünï/cödé", "/q?x=1&y=/z"];
    for (i, path) in paths.iter().enumerate() {
        vault.calls.insert(&call("a1", 1_000 + i as u64, 0, path)).unwrap();
    }

    for (i, path) in paths.iter().enumerate() {
        let page = vault.calls.list(&CallFilter::new("a1", 10).path(*path)).unwrap();
        assert_eq!(page.calls.len(), 1, "path {path:?}");
        assert_eq!(page.calls[0].id, CallId::from_parts(1_000 + i as u64, 0));
        assert_eq!(page.calls[0].path, *path);
    }
}

#[test]
fn test_unknown_app_lists_nothing() {
    let vault = CallVault::in_memory();
    vault.calls.insert(&call("a1", 1_000, 0, "/f")).unwrap();

    let page = vault.calls.list(&CallFilter::new("a2", 10)).unwrap();
    assert!(page.calls.is_empty());
    assert!(page.next_cursor.is_none());
}

#[test]
fn test_rewritten_path_leaves_old_listing() {
    init_tracing();
    let vault = CallVault::in_memory();
    let original = call("a1", 1_000, 0, "/f");
    let mut moved = original.clone();
    moved.path = "/g".to_string();
    vault.calls.insert(&original).unwrap();
    vault.calls.insert(&moved).unwrap();

    let old = vault.calls.list(&CallFilter::new("a1", 10).path("/f")).unwrap();
    assert!(old.calls.is_empty());

    let new = vault.calls.list(&CallFilter::new("a1", 10).path("/g")).unwrap();
    assert_eq!(new.calls, vec![moved.clone()]);

    let app = vault.calls.list(&CallFilter::new("a1", 10)).unwrap();
    assert_eq!(app.calls, vec![moved]);
}
