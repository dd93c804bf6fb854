//! GoodKarma Storage Layer
//!
//! Records live in process memory only. Everything above this crate talks to
//! the [`Store`] trait so another backend can be dropped in without touching
//! the sequencing logic.

mod error;
mod memory;

pub use error::StoreError;
pub use memory::MemoryStore;

pub type Result<T> = std::result::Result<T, StoreError>;

/// A keyed record store.
///
/// Keys are client-supplied strings. Every method is a single atomic
/// operation against the backing map.
pub trait Store<V>: Send + Sync {
    /// Fetch a copy of the record stored under `key`.
    fn get(&self, key: &str) -> Result<Option<V>>;

    /// Insert a new record. Fails with [`StoreError::AlreadyExists`] if the
    /// key is taken.
    fn insert(&self, key: &str, value: V) -> Result<()>;

    /// Run `f` against the stored record while holding exclusive access.
    /// Returns `None` when the key is absent.
    fn update<T, F>(&self, key: &str, f: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut V) -> T;

    /// Remove the record. Returns whether anything was removed.
    fn delete(&self, key: &str) -> Result<bool>;

    /// All keys, sorted.
    fn list(&self) -> Result<Vec<String>>;

    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
