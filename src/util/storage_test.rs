use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Entry {
    name: String,
    count: u32,
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_reads_missing_key_as_none() {
    let store = MemoryStore::new();
    assert_eq!(store.read("absent"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_write_then_read() {
    let mut store = MemoryStore::new();
    store.write("k", "v1").unwrap();
    store.write("k", "v2").unwrap();
    assert_eq!(store.read("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_delete_missing_key_succeeds() {
    let mut store = MemoryStore::new();
    assert!(store.delete("absent").is_ok());
}

#[test]
fn memory_store_delete_removes_entry() {
    let mut store = MemoryStore::new();
    store.write("k", "v").unwrap();
    store.delete("k").unwrap();
    assert!(!store.contains("k"));
}

#[test]
fn rejecting_store_fails_writes_and_deletes() {
    let mut store = MemoryStore::rejecting();
    assert!(matches!(store.write("k", "v"), Err(StorageError::Rejected(_))));
    assert!(matches!(store.delete("k"), Err(StorageError::Rejected(_))));
    assert_eq!(store.read("k"), None);
}

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_without_browser() {
    let mut store = LocalStorage;
    assert_eq!(store.read("gameValues"), None);
    assert!(matches!(store.write("gameValues", "[]"), Err(StorageError::Unavailable)));
    assert!(matches!(store.delete("gameValues"), Err(StorageError::Unavailable)));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_then_load_json_preserves_order_and_fields() {
    let mut store = MemoryStore::new();
    let entries = vec![
        Entry { name: "b".to_owned(), count: 2 },
        Entry { name: "a".to_owned(), count: 1 },
    ];
    save_json(&mut store, "entries", &entries).unwrap();
    let loaded: Vec<Entry> = load_json(&store, "entries").unwrap();
    assert_eq!(loaded, entries);
}

#[test]
fn load_json_treats_corrupt_value_as_absent() {
    let mut store = MemoryStore::new();
    store.write("entries", "{not json").unwrap();
    let loaded: Option<Vec<Entry>> = load_json(&store, "entries");
    assert!(loaded.is_none());
}

#[test]
fn load_json_treats_wrong_shape_as_absent() {
    let mut store = MemoryStore::new();
    store.write("entries", r#"{"name":"x"}"#).unwrap();
    let loaded: Option<Vec<Entry>> = load_json(&store, "entries");
    assert!(loaded.is_none());
}

#[test]
fn save_json_surfaces_storage_failure() {
    let mut store = MemoryStore::rejecting();
    let result = save_json(&mut store, "entries", &Vec::<Entry>::new());
    assert!(matches!(result, Err(StorageError::Rejected(_))));
}
