//! Key-value persistence surfaces
//!
//! The guide only ever stores a handful of string values: the session flags
//! written by the redirect controller and the checklist state written by the
//! navigation helpers. Every store is shared through `&self`, so a clone of a
//! store handle sees the same entries, the way two pages of one browsing
//! session see the same session storage.

mod file;
mod memory;
mod session;

pub use file::JsonFileStore;
pub use memory::{DisabledStore, MemoryStore};
pub use session::{SessionFlags, PREFERRED_LANGUAGE_KEY, SESSION_FLAG_KEY};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage quota exceeded while writing '{0}'")]
    QuotaExceeded(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string key-value store, such as session or local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
