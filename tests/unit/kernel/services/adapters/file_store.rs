use super::*;
use tempfile::tempdir;

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("buffers.json")).unwrap();
    assert_eq!(store.get("tryit-code-js").unwrap(), None);
}

#[test]
fn test_set_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buffers.json");

    let mut store = FileStore::open(&path).unwrap();
    store.set("tryit-code-html", "<p>hi</p>").unwrap();
    store.set("tryit-theme", "theme-dark").unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("tryit-code-html").unwrap().as_deref(),
        Some("<p>hi</p>")
    );
    assert_eq!(
        reopened.get("tryit-theme").unwrap().as_deref(),
        Some("theme-dark")
    );
}

#[test]
fn test_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("buffers.json");
    let mut store = FileStore::open(&path).unwrap();
    store.set("k", "v").unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buffers.json");
    std::fs::write(&path, "[1, 2").unwrap();
    assert!(matches!(FileStore::open(&path), Err(StorageError::Corrupt(_))));
}

#[test]
fn test_blank_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buffers.json");
    std::fs::write(&path, "  \n").unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("anything").unwrap(), None);
}
