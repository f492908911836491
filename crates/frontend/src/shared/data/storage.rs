use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use contracts::shared::errors::StoreError;

/// Raw key-value persistence underneath the record store
///
/// Reads are infallible by contract: an unreachable or empty backend reads
/// as "nothing stored". Only writes surface errors.
pub trait StorageBackend: Clone {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`-backed persistence (the reference deployment)
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(|err| StoreError::StorageUnavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::StorageUnavailable("local storage disabled".to_string()))
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::WriteFailed(format!("{err:?}")))
    }
}

/// In-memory persistence for tests and non-browser targets; clones share
/// the same underlying map, mirroring how every `BrowserStorage` handle
/// sees one `localStorage`.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
