use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::KeyedStore;
use crate::error::StoreError;

/// A `HashMap` behind a single `RwLock`. `update` holds the write lock for
/// the whole read-modify-write.
#[derive(Debug, Default)]
pub struct MemoryStore<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Keys starting with `prefix`, sorted.
    pub fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        let mut keys: Vec<String> = entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}

fn poisoned<T>(e: PoisonError<T>) -> StoreError {
    StoreError::LockPoisoned(e.to_string())
}

impl<V> KeyedStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> Result<Option<V>, StoreError> {
        Ok(self.entries.read().map_err(poisoned)?.get(key).cloned())
    }

    fn put(&self, key: &str, value: V) -> Result<(), StoreError> {
        self.entries
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<Option<V>, StoreError> {
        Ok(self.entries.write().map_err(poisoned)?.remove(key))
    }

    fn update(&self, key: &str, f: &mut dyn FnMut(Option<V>) -> V) -> Result<V, StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let next = f(entries.remove(key));
        entries.insert(key.to_string(), next.clone());
        Ok(next)
    }
}
