//! In-memory store backed by a shared map

use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::StoreError;
use crate::{Result, Store};

pub struct MemoryStore<V> {
    records: Arc<RwLock<HashMap<String, V>>>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for MemoryStore<V> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<V> Store<V> for MemoryStore<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> Result<Option<V>> {
        Ok(self.records.read().get(key).cloned())
    }

    fn insert(&self, key: &str, value: V) -> Result<()> {
        match self.records.write().entry(key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    fn update<T, F>(&self, key: &str, f: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut V) -> T,
    {
        Ok(self.records.write().get_mut(key).map(f))
    }

    fn delete(&self, key: &str) -> Result<bool> {
        let removed = self.records.write().remove(key).is_some();
        if removed {
            tracing::trace!(key = %key, "Removed record");
        }
        Ok(removed)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.records.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_key() {
        let store = MemoryStore::new();
        store.insert("a", 1).unwrap();

        let err = store.insert("a", 2).unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("a".to_string()));

        // Original value untouched
        assert_eq!(store.get("a").unwrap(), Some(1));
    }

    #[test]
    fn test_update_and_missing_key() {
        let store = MemoryStore::new();
        store.insert("counter", 0u32).unwrap();

        let after = store
            .update("counter", |n| {
                *n += 1;
                *n
            })
            .unwrap();
        assert_eq!(after, Some(1));
        assert_eq!(store.get("counter").unwrap(), Some(1));

        let missing = store.update("nope", |n: &mut u32| *n).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.insert("a", "x".to_string()).unwrap();

        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
        assert!(store.get("a").unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_clones_share_records() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.insert("b", 2).unwrap();
        other.insert("a", 1).unwrap();

        assert_eq!(store.list().unwrap(), vec!["a", "b"]);
        assert_eq!(other.len().unwrap(), 2);
    }
}
