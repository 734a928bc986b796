use bplib_core::{AdminLibrary, MemorySettingsStore};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn library() -> AdminLibrary<MemorySettingsStore> {
    AdminLibrary::new(MemorySettingsStore::new(), "/srv/panel")
}

#[test]
fn file_read_returns_contents_for_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.txt");
    fs::write(&path, "hello extensions").unwrap();

    assert_eq!(library().file_read(&path), "hello extensions");
}

#[test]
fn file_read_reports_missing_path_as_string_payload() {
    assert_eq!(
        library().file_read("/tmp/missing123"),
        "File not found: /tmp/missing123"
    );
}

#[test]
fn file_read_reports_unreadable_path_as_string_payload() {
    // A directory exists but cannot be read into a string.
    let dir = tempdir().unwrap();
    let expected = format!("File is not readable: {}", dir.path().display());
    assert_eq!(library().file_read(dir.path()), expected);
}

#[test]
fn file_read_reports_non_utf8_content_as_unreadable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let expected = format!("File is not readable: {}", path.display());
    assert_eq!(library().file_read(&path), expected);
}

#[test]
fn file_make_creates_an_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.txt");

    library().file_make(&path);

    assert!(path.is_file());
    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn file_make_truncates_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stale.txt");
    fs::write(&path, "old content").unwrap();

    library().file_make(&path);

    assert_eq!(fs::read(&path).unwrap(), Vec::<u8>::new());
}

#[test]
fn file_make_swallows_invalid_paths() {
    // Parent directory does not exist; the call must not panic or report.
    library().file_make("/tmp/bplib-no-such-dir-123/file.txt");
    assert!(!Path::new("/tmp/bplib-no-such-dir-123/file.txt").exists());
}

#[test]
fn file_wipe_removes_single_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("victim.txt");
    fs::write(&path, "bye").unwrap();

    library().file_wipe(&path);

    assert!(!path.exists());
    assert!(dir.path().exists());
}

#[test]
fn file_wipe_removes_nested_tree_and_leaves_siblings() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let sibling = dir.path().join("sibling.txt");
    fs::create_dir_all(target.join("a/b")).unwrap();
    fs::write(target.join("top.txt"), "t").unwrap();
    fs::write(target.join("a/mid.txt"), "m").unwrap();
    fs::write(target.join("a/b/leaf.txt"), "l").unwrap();
    fs::write(&sibling, "untouched").unwrap();

    library().file_wipe(&target);

    assert!(!target.exists());
    assert_eq!(fs::read_to_string(&sibling).unwrap(), "untouched");

    let remaining: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(remaining, vec![std::ffi::OsString::from("sibling.txt")]);
}

#[test]
fn file_wipe_is_noop_for_missing_path() {
    let dir = tempdir().unwrap();
    library().file_wipe(dir.path().join("never-existed"));
    assert!(dir.path().exists());
}
