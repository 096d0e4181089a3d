//! In-Memory Key-Value Store Adapter
//!
//! Keeps records in a map for the lifetime of the process.
//! Useful for testing and for throwaway sessions.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::ports::{validate_key, KeyValueStore, StorageError};

/// In-memory storage for session records
///
/// Clones share the same underlying map, so a clone kept by a test observes
/// every write made through the store handed to the session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records
    pub fn clear(&self) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Get the number of stored records
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_get() {
        let store = InMemoryKeyValueStore::new();

        store.set("rumi_user", "{}").unwrap();

        assert_eq!(store.get("rumi_user").unwrap().as_deref(), Some("{}"));
        assert!(store.contains("rumi_user").unwrap());
    }

    #[test]
    fn test_memory_store_get_missing_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert_eq!(store.get("rumi_user").unwrap(), None);
    }

    #[test]
    fn test_memory_store_clones_share_records() {
        let store = InMemoryKeyValueStore::new();
        let observer = store.clone();

        store.set("rumi_user", "x").unwrap();

        assert_eq!(observer.get("rumi_user").unwrap().as_deref(), Some("x"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_memory_store_remove_and_clear() {
        let store = InMemoryKeyValueStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_validates_keys() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.set("", "x").is_err());
    }
}
