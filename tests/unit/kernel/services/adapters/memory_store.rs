use super::*;

#[test]
fn test_get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("tryit-code-html").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn test_set_then_get() {
    let mut store = MemoryStore::new();
    store.set("tryit-code-css", "a {}").unwrap();
    store.set("tryit-code-css", "b {}").unwrap();
    assert_eq!(store.get("tryit-code-css").unwrap().as_deref(), Some("b {}"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_quota_counts_keys_and_values() {
    let mut store = MemoryStore::with_quota(10);
    store.set("k", "123456789").unwrap();
    assert_eq!(store.usage(), 10);

    let err = store.set("k2", "x").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            needed: 13,
            quota: 10
        }
    ));
    assert_eq!(store.get("k2").unwrap(), None);
}

#[test]
fn test_quota_allows_replacing_existing_value() {
    let mut store = MemoryStore::with_quota(10);
    store.set("k", "123456789").unwrap();
    store.set("k", "abc").unwrap();
    assert_eq!(store.usage(), 4);
}

#[test]
fn test_unavailable_store_fails_every_call() {
    let mut store = MemoryStore::new();
    store.set_unavailable(true);
    assert!(matches!(store.get("a"), Err(StorageError::Unavailable(_))));
    assert!(matches!(store.set("a", "b"), Err(StorageError::Unavailable(_))));

    store.set_unavailable(false);
    store.set("a", "b").unwrap();
}
