//! Session storage

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session storage unavailable")]
    Unavailable,
}

/// Key/value store holding the session record.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Remove `key`; returns the old value.
    fn remove_item(&self, key: &str) -> Option<String>;
}

/// In-memory session storage
#[derive(Default)]
pub struct MemoryStorage {
    items: std::sync::RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().ok()?;
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut items = self.items.write().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Option<String> {
        let mut items = self.items.write().ok()?;
        items.remove(key)
    }
}
