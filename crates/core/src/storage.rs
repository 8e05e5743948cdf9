//! Key-value storage seam.
//!
//! The core reads and writes whole string values by key, the same contract a
//! browser `localStorage` offers. Terminal builds plug in the file-backed store
//! from `tui-guess-store`; tests use [`MemoryStorage`].

use std::collections::HashMap;

use crate::error::StorageError;

/// String-keyed store for persisted game data.
pub trait Storage {
    /// Current value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store (nothing survives the process).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_get_set() {
        let mut store = MemoryStorage::new();
        assert!(store.is_empty());
        assert_eq!(store.get("bestScore"), None);

        store.set("bestScore", "5").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("5"));

        store.set("bestScore", "3").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("3"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove("bestScore").as_deref(), Some("3"));
        assert!(store.is_empty());
    }

    #[test]
    fn storage_works_through_mut_ref() {
        fn write(mut store: impl Storage) {
            store.set("k", "v").unwrap();
        }

        let mut store = MemoryStorage::new();
        write(&mut store);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
