//! Persistent key-value storage and JSON helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted collection is one JSON document under one key. State
//! modules talk to the [`KeyValueStore`] trait so they can run against
//! browser `localStorage` in the app and an in-memory map in tests.
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail: a missing key, unavailable storage and unparseable data
//! all look like an absent value. Writes report failure so callers can tell
//! the user their change is held in memory only.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

/// Synchronous string-keyed persistent mapping.
pub trait KeyValueStore {
    /// Read the raw value for `key`, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Browser `window.localStorage`, scoped to the page origin.
///
/// Outside the `csr` build there is no browser, so reads see nothing and
/// writes report [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(_) => None,
    }
}

impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("localStorage read failed for {key}: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("localStorage unavailable; {key} reads as absent");
            None
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("localStorage unavailable; dropping {} bytes for {key}", value.len());
            Err(StorageError::Unavailable)
        }
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("localStorage unavailable; cannot delete {key}");
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store for tests and hosts without browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes and deletes always fail, as when storage is full
    /// or disabled by the browser.
    #[must_use]
    pub fn rejecting() -> Self {
        Self { entries: HashMap::new(), reject_writes: true }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected("quota exceeded".to_owned()));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected("quota exceeded".to_owned()));
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// Load a JSON value stored under `key`.
///
/// Corrupt data is logged and treated as absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.read(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unparseable value under {key}: {e}");
            None
        }
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)?;
    log::debug!("persisted {} bytes under {key}", raw.len());
    Ok(())
}
