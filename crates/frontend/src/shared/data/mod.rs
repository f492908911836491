//! Local record store
//!
//! Durable per-entity keyed persistence behind an async interface, so a
//! future network-backed implementation can slot in without touching the
//! pages. The reference deployment writes to the browser's local storage.

pub mod seed;
pub mod service;
pub mod storage;

pub use service::DataService;
pub use storage::{BrowserStorage, MemoryStorage, StorageBackend};

/// Store type the pages pull from context.
pub type AppData = DataService<BrowserStorage>;
