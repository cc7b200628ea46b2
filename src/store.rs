//! Best-effort key-value persistence.
//!
//! [`KeyValueStore`] is the raw backend and reports failures. [`PreferenceStore`]
//! wraps a backend and never lets a failure escape: it logs a warning and
//! answers `false` / `None` so callers fall back to their defaults. There are
//! no retries.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[cfg(test)]
use std::cell::{Cell, RefCell};
#[cfg(test)]
use std::collections::HashMap;

use crate::error::PageError;

/// A string key-value backend such as `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Failure-absorbing wrapper around a [`KeyValueStore`].
#[derive(Debug)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Persist `value` under `key`. Returns whether the write landed.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.backend.set_item(key, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("preference {key:?} not saved: {err}");
                false
            }
        }
    }

    /// Read the value under `key`; absent on failure.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("preference {key:?} not readable: {err}");
                None
            }
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

/// In-memory backend. Can be switched into a failing mode to stand in for
/// disabled storage.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails.
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::default();
        store.failing.set(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Drop a key, as a user clearing site data would.
    pub fn clear(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        if self.failing.get() {
            return Err(PageError::StorageUnavailable);
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        if self.failing.get() {
            return Err(PageError::Storage("quota exceeded".into()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
