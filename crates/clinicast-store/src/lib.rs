//! clinicast-store
//!
//! Keyed cache interface injected into the engine, plus an in-process
//! implementation. Hosts that want persistence or cross-process sharing
//! implement [`KeyedStore`] over their own backend.

pub mod error;
pub mod memory;

use error::StoreError;

/// A string-keyed store of whole values. Values are replaced wholesale;
/// there is no partial update.
pub trait KeyedStore<V>: Send + Sync
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> Result<Option<V>, StoreError>;

    fn put(&self, key: &str, value: V) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<Option<V>, StoreError>;

    /// Read-modify-write. The default is a plain get followed by a put and
    /// is not atomic; implementations backed by a lock should override it.
    fn update(&self, key: &str, f: &mut dyn FnMut(Option<V>) -> V) -> Result<V, StoreError> {
        let next = f(self.get(key)?);
        self.put(key, next.clone())?;
        Ok(next)
    }
}
