//! Binding between one storage key and one in-memory collection.
//!
//! A [`Persisted`] starts in [`Phase::Loading`]. While loading, writes are
//! refused so that an empty initial collection can never overwrite data that
//! has not been read yet. [`Persisted::hydrate`] reads the stored value once
//! and moves to [`Phase::Ready`]; from then on every [`Persisted::persist`]
//! rewrites the whole collection.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, StorageError};

/// Hydration phase of a [`Persisted`] binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Stored value not read yet; writes are skipped.
    Loading,
    /// Stored value read; every change is written back.
    Ready,
}

/// A storage key holding a JSON-encoded `T`.
pub struct Persisted<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    phase: Phase,
    _value: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Bind `key` in `store`. The binding starts in [`Phase::Loading`].
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            phase: Phase::Loading,
            _value: PhantomData,
        }
    }

    /// The storage key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Current hydration phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Read the stored value and enter [`Phase::Ready`].
    ///
    /// Never fails: a missing key, an unreadable backend, or a value that does
    /// not decode as `T` all yield `T::default()`. Failures are logged.
    /// Nothing is written during hydration.
    pub fn hydrate(&mut self) -> T {
        let value = match self.store.get_item(self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!(key = self.key, error = %e, "Discarding undecodable stored value");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "Failed to read stored value");
                T::default()
            }
        };

        self.phase = Phase::Ready;
        value
    }

    /// Write `value` under the key if hydration has completed.
    ///
    /// Returns `Ok(false)` without touching the store while still
    /// [`Phase::Loading`], `Ok(true)` once written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the backend write fails.
    pub fn persist(&self, value: &T) -> Result<bool, StorageError> {
        if self.phase == Phase::Loading {
            tracing::debug!(key = self.key, "Skipping write before hydration");
            return Ok(false);
        }

        let encoded = serde_json::to_string(value)?;
        self.store.set_item(self.key, &encoded)?;
        Ok(true)
    }

    /// [`Persisted::persist`], logging instead of returning failures.
    ///
    /// In-memory state is kept either way; the next successful write brings
    /// the store back in line.
    pub fn commit(&self, value: &T) {
        if let Err(e) = self.persist(value) {
            tracing::error!(key = self.key, error = %e, "Failed to persist collection");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(key: &str, value: &str) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store.set_item(key, value).unwrap();
        store
    }

    #[test]
    fn test_no_write_before_hydration() {
        let store = store_with("k", "[1,2,3]");
        let bridge: Persisted<Vec<u32>> = Persisted::new(store.clone(), "k");

        assert_eq!(bridge.phase(), Phase::Loading);
        assert!(!bridge.persist(&Vec::new()).unwrap());
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_hydrate_then_persist() {
        let store = store_with("k", "[1,2,3]");
        let mut bridge: Persisted<Vec<u32>> = Persisted::new(store.clone(), "k");

        assert_eq!(bridge.hydrate(), vec![1, 2, 3]);
        assert_eq!(bridge.phase(), Phase::Ready);

        assert!(bridge.persist(&vec![4]).unwrap());
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("[4]"));
    }

    #[test]
    fn test_hydrate_does_not_write() {
        let store = Arc::new(MemoryStore::new());
        let mut bridge: Persisted<Vec<u32>> = Persisted::new(store.clone(), "k");

        assert!(bridge.hydrate().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_value_falls_back_to_default() {
        let store = store_with("k", "not json at all");
        let mut bridge: Persisted<Vec<u32>> = Persisted::new(store, "k");

        assert!(bridge.hydrate().is_empty());
        assert_eq!(bridge.phase(), Phase::Ready);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_default() {
        let store = store_with("k", r#"{"not":"an array"}"#);
        let mut bridge: Persisted<Vec<u32>> = Persisted::new(store, "k");

        assert!(bridge.hydrate().is_empty());
    }

    #[test]
    fn test_optional_value() {
        let store = Arc::new(MemoryStore::new());
        let mut bridge: Persisted<Option<String>> = Persisted::new(store.clone(), "last");

        assert_eq!(bridge.hydrate(), None);
        bridge.commit(&Some("x".to_string()));
        assert_eq!(store.get_item("last").unwrap().as_deref(), Some("\"x\""));
    }
}
