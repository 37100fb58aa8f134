//! `window.localStorage` as a [`KeyValueStore`].

use web_sys::Storage;

use crate::storage::{KeyValueStore, MemoryStore, StorageError};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the page's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside a window or when the
    /// browser denies access (sandboxed frames, some privacy modes).
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// `localStorage` when the browser grants it, else a session-only store.
pub fn open_or_memory() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{e}; tasks will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
