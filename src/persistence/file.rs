//! JSON file backed store

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StoreError};

/// Current envelope version
const ENVELOPE_VERSION: u32 = 1;

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    values: BTreeMap<u32, i32>,
}

/// Store persisted as a small JSON document.
///
/// Every write rewrites the whole file through a sibling `.tmp` file and a
/// rename, so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<u32, i32>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(json) => {
                let envelope: Envelope =
                    serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                        path: path.clone(),
                        source,
                    })?;
                if envelope.version != ENVELOPE_VERSION {
                    return Err(StoreError::UnsupportedVersion {
                        path,
                        version: envelope.version,
                    });
                }
                log::info!("Loaded {} values from {}", envelope.values.len(), path.display());
                envelope.values
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let envelope = Envelope {
            version: ENVELOPE_VERSION,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("tmp");
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::debug!("Store saved to {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn read_int(&self, key: u32) -> Result<Option<i32>, StoreError> {
        Ok(self.values.get(&key).copied())
    }

    fn write_int(&mut self, key: u32, value: i32) -> Result<(), StoreError> {
        let previous = self.values.insert(key, value);
        if previous == Some(value) {
            return Ok(());
        }
        if let Err(e) = self.flush() {
            // Keep memory in step with what is on disk so a retry writes again
            match previous {
                Some(old) => self.values.insert(key, old),
                None => self.values.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: u32) -> Result<(), StoreError> {
        let Some(old) = self.values.remove(&key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.values.insert(key, old);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.read_int(7).unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_int(0xffdd_fdfd, 5).unwrap();
        store.write_int(2, -1).unwrap();
        drop(store);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.read_int(0xffdd_fdfd).unwrap(), Some(5));
        assert_eq!(store.read_int(2).unwrap(), Some(-1));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_int(1, 1).unwrap();
        store.remove(1).unwrap();
        drop(store);

        assert!(!JsonFileStore::open(&path).unwrap().exists(1).unwrap());
    }

    #[test]
    fn test_failed_write_can_be_retried() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("later");
        let path = parent.join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert!(matches!(
            store.write_int(1, 5),
            Err(StoreError::Io { .. })
        ));
        assert_eq!(store.read_int(1).unwrap(), None);

        fs::create_dir_all(&parent).unwrap();
        store.write_int(1, 5).unwrap();
        assert!(path.exists());
        assert_eq!(
            JsonFileStore::open(&path).unwrap().read_int(1).unwrap(),
            Some(5)
        );
    }

    #[test]
    fn test_failed_remove_keeps_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.write_int(1, 2).unwrap();

        // A directory squatting on the tmp path makes the next flush fail
        fs::create_dir(path.with_extension("tmp")).unwrap();
        assert!(store.remove(1).is_err());
        assert_eq!(store.read_int(1).unwrap(), Some(2));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, r#"{"version": 9, "values": {}}"#).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(StoreError::UnsupportedVersion { version: 9, .. })
        ));
    }
}
