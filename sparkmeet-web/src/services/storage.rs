//! Port over the browser's scoped key-value storage.
//!
//! The session store only ever talks to this trait, so tests can swap the
//! real `sessionStorage` for an in-memory map.

use gloo_storage::{SessionStorage, Storage};

/// Minimal key-value storage interface.
pub trait StoragePort {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Production port backed by the browser's `sessionStorage`.
///
/// Values are stored verbatim; serialization stays with the caller so the
/// persisted blob keeps the exact JSON shape other tabs expect.
#[derive(Debug, Default)]
pub struct BrowserSessionStorage;

impl StoragePort for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = SessionStorage::raw().set_item(key, value) {
            log::error!("session storage write for {key:?} failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = SessionStorage::raw().remove_item(key) {
            log::error!("session storage removal for {key:?} failed: {err:?}");
        }
    }
}

/// In-memory storage used by native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
