//! Configuration files and builder validation.

use callvault::prelude::*;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config(
        r#"
        marker_failure = "tolerate"
        time_seek = false
        seek_to_time = true
        max_page_size = 25
        "#,
    );

    let vault = CallVault::builder().config_file(file.path()).unwrap().open().unwrap();
    let opts = vault.options();
    assert_eq!(opts.marker_failure, MarkerFailurePolicy::Tolerate);
    assert!(!opts.time_seek);
    assert!(opts.seek_to_time);
    assert_eq!(opts.max_page_size, 25);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("time_seek = false\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.marker_failure, MarkerFailurePolicy::Abort);
    assert_eq!(config.max_page_size, 1000);
}

#[test]
fn test_builder_overrides_loaded_config() {
    let config = Config::from_toml_str(r#"marker_failure = "tolerate""#).unwrap();
    let vault = CallVault::builder()
        .config(config)
        .marker_failure(MarkerFailurePolicy::Abort)
        .open()
        .unwrap();
    assert_eq!(vault.options().marker_failure, MarkerFailurePolicy::Abort);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("max_page_size = \"lots\"");
    assert!(matches!(Config::from_file(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_zero_page_ceiling_fails_open() {
    let err = CallVault::builder().max_page_size(0).open().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_in_memory_defaults() {
    let vault = CallVault::in_memory();
    assert_eq!(*vault.options(), CallStoreOptions::default());
    assert!(vault.options().time_seek);
    assert!(!vault.options().seek_to_time);
}
