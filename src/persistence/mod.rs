//! Integer key/value persistence
//!
//! The app stores a single preference (the move interval) under a fixed
//! integer key. Stores:
//! - `MemoryStore`: process-local, for tests and throwaway runs
//! - `JsonFileStore`: versioned JSON envelope, atomic tmp-then-rename writes

mod file;

pub use file::JsonFileStore;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store file {path} has unsupported version {version}")]
    UnsupportedVersion { path: PathBuf, version: u32 },
}

/// Integer values under integer keys
pub trait KeyValueStore {
    fn read_int(&self, key: u32) -> Result<Option<i32>, StoreError>;

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StoreError>;

    fn remove(&mut self, key: u32) -> Result<(), StoreError>;

    fn exists(&self, key: u32) -> Result<bool, StoreError> {
        Ok(self.read_int(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read_int(&self, key: u32) -> Result<Option<i32>, StoreError> {
        (**self).read_int(key)
    }

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StoreError> {
        (**self).write_int(key, value)
    }

    fn remove(&mut self, key: u32) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<u32, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one value
    pub fn with_value(key: u32, value: i32) -> Self {
        let mut store = Self::new();
        store.values.insert(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read_int(&self, key: u32) -> Result<Option<i32>, StoreError> {
        Ok(self.values.get(&key).copied())
    }

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StoreError> {
        self.values.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: u32) -> Result<(), StoreError> {
        self.values.remove(&key);
        Ok(())
    }
}
