//! Named-value registry backing the value editor view.
//!
//! DESIGN
//! ======
//! The registry is an ordered list of `{id, name, value}` records persisted
//! as one JSON array. `name` is the lookup key and is kept unique by upsert:
//! applying a value to an existing name overwrites it in place, otherwise a
//! record with a fresh id is appended. Every mutation rewrites the whole
//! list, so the in-memory copy is always the source for the next write.

#[cfg(test)]
#[path = "values_test.rs"]
mod values_test;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError, with_storage_note};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// A user-labelled simulated value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    /// Generated on creation; never changes or gets reused.
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Result of [`upsert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A record with this name existed and its value was replaced.
    Updated,
    /// No record matched; a new one was appended.
    Inserted,
}

/// Fresh unique record id.
#[must_use]
pub fn new_value_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Set `name` to `value`, keeping id and position of an existing record.
///
/// `make_id` is only called when a record has to be created. If stored data
/// somehow holds duplicate names, every one of them takes the new value so
/// the last write wins.
pub fn upsert<F>(values: &mut Vec<NamedValue>, name: &str, value: &str, make_id: F) -> UpsertOutcome
where
    F: FnOnce() -> String,
{
    let mut matched = false;
    for existing in values.iter_mut().filter(|v| v.name == name) {
        existing.value = value.to_owned();
        matched = true;
    }
    if matched {
        return UpsertOutcome::Updated;
    }
    values.push(NamedValue { id: make_id(), name: name.to_owned(), value: value.to_owned() });
    UpsertOutcome::Inserted
}

/// Editor view state: the registry plus the form fields around it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueEditorState {
    pub values: Vec<NamedValue>,
    /// "Value name" input; also the lookup key for load.
    pub name_query: String,
    /// Read-only display of the last loaded or applied value.
    pub current_value: String,
    /// "New value" input.
    pub pending_value: String,
    pub status: String,
    pub storage_key: String,
}

impl ValueEditorState {
    /// Load the registry stored under `storage_key`; absent or corrupt data
    /// starts an empty registry.
    pub fn initialize<S>(store: &S, storage_key: impl Into<String>) -> Self
    where
        S: KeyValueStore + ?Sized,
    {
        let storage_key = storage_key.into();
        let values: Vec<NamedValue> = load_json(store, &storage_key).unwrap_or_default();
        log::debug!("loaded {} saved values from {storage_key}", values.len());
        Self { values, storage_key, ..Self::default() }
    }

    pub fn set_name_query(&mut self, name: impl Into<String>) {
        self.name_query = name.into();
        self.status.clear();
    }

    pub fn set_pending_value(&mut self, value: impl Into<String>) {
        self.pending_value = value.into();
        self.status.clear();
    }

    /// Upsert `name_query` = `pending_value` and persist the registry.
    pub fn apply<S>(&mut self, store: &mut S) -> Result<UpsertOutcome, ValidationError>
    where
        S: KeyValueStore + ?Sized,
    {
        if self.name_query.is_empty() || self.pending_value.is_empty() {
            let err = ValidationError::MissingNameOrValue;
            self.status = err.to_string();
            return Err(err);
        }

        let name = self.name_query.clone();
        let value = self.pending_value.clone();
        let outcome = upsert(&mut self.values, &name, &value, new_value_id);
        log::info!("applied value {name:?} ({outcome:?})");

        let saved = self.persist(store);
        self.current_value.clone_from(&value);
        self.status = with_storage_note(format!("Value '{name}' applied and saved: {value}"), &saved);
        Ok(outcome)
    }

    /// Look up `name_query` without touching the store.
    ///
    /// Returns whether a record was found. A miss clears both value fields.
    pub fn load(&mut self) -> bool {
        let found = self
            .values
            .iter()
            .find(|v| v.name == self.name_query)
            .map(|v| v.value.clone());
        match found {
            Some(value) => {
                self.status = format!("Value '{}' loaded: {value}", self.name_query);
                self.current_value.clone_from(&value);
                self.pending_value = value;
                true
            }
            None => {
                self.current_value.clear();
                self.pending_value.clear();
                self.status = format!("Value '{}' not found.", self.name_query);
                false
            }
        }
    }

    /// Remove the record with `id` and persist the remainder.
    ///
    /// Unknown ids leave state and status untouched.
    pub fn delete_one<S>(&mut self, store: &mut S, id: &str) -> Option<NamedValue>
    where
        S: KeyValueStore + ?Sized,
    {
        let index = self.values.iter().position(|v| v.id == id)?;
        let removed = self.values.remove(index);
        log::info!("deleted value {:?}", removed.name);

        let saved = self.persist(store);
        self.status = with_storage_note(format!("Value '{}' deleted.", removed.name), &saved);
        Some(removed)
    }

    /// Drop every record and the stored entry.
    pub fn clear_all<S>(&mut self, store: &mut S)
    where
        S: KeyValueStore + ?Sized,
    {
        self.values.clear();
        let removed = store.delete(&self.storage_key);
        if let Err(e) = &removed {
            log::warn!("failed to remove {}: {e}", self.storage_key);
        }
        log::info!("cleared all saved values");
        self.status = with_storage_note("All saved values have been deleted.".to_owned(), &removed);
    }

    fn persist<S>(&self, store: &mut S) -> Result<(), StorageError>
    where
        S: KeyValueStore + ?Sized,
    {
        let result = save_json(store, &self.storage_key, &self.values);
        if let Err(e) = &result {
            log::warn!("saved values held in memory only: {e}");
        }
        result
    }
}
