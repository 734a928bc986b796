use bplib_core::{installed_extensions_path, AdminLibrary, MemorySettingsStore};
use std::fs;
use tempfile::{tempdir, TempDir};

fn library_with_manifest(contents: &str) -> (AdminLibrary<MemorySettingsStore>, TempDir) {
    let base = tempdir().unwrap();
    let manifest = installed_extensions_path(base.path());
    fs::create_dir_all(manifest.parent().unwrap()).unwrap();
    fs::write(&manifest, contents).unwrap();

    let lib = AdminLibrary::new(MemorySettingsStore::new(), base.path());
    (lib, base)
}

#[test]
fn extension_is_true_for_installed_identifier() {
    let (lib, _base) = library_with_manifest("foo,bar,");
    assert!(lib.extension("foo"));
    assert!(lib.extension("bar"));
    assert!(!lib.extension("baz"));
}

#[test]
fn extension_matches_identifier_suffixes() {
    // Known false positive: `foo,` occurs inside `barfoo,`.
    let (lib, _base) = library_with_manifest("barfoo,");
    assert!(lib.extension("foo"));
    assert!(lib.extension("barfoo"));
}

#[test]
fn extension_requires_the_trailing_comma() {
    let (lib, _base) = library_with_manifest("foo,bar");
    assert!(lib.extension("foo"));
    assert!(!lib.extension("bar"));
}

#[test]
fn extension_runs_against_sentinel_text_when_manifest_is_missing() {
    let base = tempdir().unwrap();
    let lib = AdminLibrary::new(MemorySettingsStore::new(), base.path());

    // The haystack is `File not found: <path>`, which contains no comma.
    assert!(!lib.extension("foo"));
    // An identifier matching the sentinel prefix still misses without a
    // trailing comma in the haystack.
    assert!(!lib.extension("File not found"));
}

#[test]
fn extension_list_preserves_file_order() {
    let (lib, _base) = library_with_manifest("foo,bar,baz,");
    assert_eq!(lib.extension_list(), vec!["foo", "bar", "baz"]);
}

#[test]
fn extension_list_drops_empty_entries() {
    let (lib, _base) = library_with_manifest("foo,,bar,");
    assert_eq!(lib.extension_list(), vec!["foo", "bar"]);
}

#[test]
fn extension_list_is_empty_for_empty_manifest() {
    let (lib, _base) = library_with_manifest("");
    assert!(lib.extension_list().is_empty());
}
