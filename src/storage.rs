//! Persistence of the task list and theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The storage medium is an opaque synchronous string store (`localStorage`
//! in the browser). [`KeyValueStore`] is the seam; [`TaskStorage`] layers the
//! two logical records on top of it.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail towards the caller: a corrupt or missing task record
//! reads as an empty list and the cause is logged. Writes report errors so
//! callers can log them, but nothing is rolled back. Last writer wins.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::StorageKeys;
use crate::task::{Task, Theme};

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored tasks are not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("tasks could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored tasks are not a JSON array")]
    NotAnArray,
}

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium rejects the write (quota,
    /// privacy mode).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process store. Used when the browser refuses `localStorage`, and in
/// tests, where the write counter shows whether an operation persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Storage adapter for the `theme` and task-list records.
#[derive(Debug)]
pub struct TaskStorage<K> {
    backend: K,
    keys: StorageKeys,
}

impl<K: KeyValueStore> TaskStorage<K> {
    pub fn new(backend: K, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    #[must_use]
    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Stored theme, or `None` for "use the document default".
    pub fn load_theme(&self) -> Option<Theme> {
        match self.backend.get(&self.keys.theme) {
            Ok(raw) => raw.as_deref().and_then(Theme::from_stored),
            Err(e) => {
                log::warn!("theme preference unreadable: {e}");
                None
            }
        }
    }

    /// Overwrite the stored theme.
    ///
    /// # Errors
    ///
    /// Propagates the backend's write error.
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.backend.set(&self.keys.theme, theme.as_str())
    }

    /// Stored tasks. Absent, corrupt, or wrongly shaped data reads as an
    /// empty list; the cause is logged.
    pub fn load_tasks(&self) -> Vec<Task> {
        self.try_load_tasks().unwrap_or_else(|e| {
            log::error!("failed to read saved tasks: {e}");
            Vec::new()
        })
    }

    /// Stored tasks, reporting why they could not be read.
    ///
    /// Records that are not objects or whose `text` is not a string are
    /// dropped; `done` is coerced to a boolean.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend fails, the value is not
    /// JSON, or the JSON is not an array.
    pub fn try_load_tasks(&self) -> Result<Vec<Task>, StorageError> {
        let Some(raw) = self.backend.get(&self.keys.items)? else {
            return Ok(Vec::new());
        };
        if raw.is_empty() {
            return Ok(Vec::new());
        }
        let parsed: Value = serde_json::from_str(&raw).map_err(StorageError::Parse)?;
        let Value::Array(records) = parsed else {
            return Err(StorageError::NotAnArray);
        };
        Ok(records.iter().filter_map(Task::from_record).collect())
    }

    /// Serialize the whole list and overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Propagates serialization or backend write errors.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(tasks).map_err(StorageError::Serialize)?;
        self.backend.set(&self.keys.items, &raw)
    }
}
