//! JSON-file-backed key-value store.
//!
//! One flat JSON object per installation, re-read on every access so that
//! concurrent handles (CLI invocations, a driver loop) always observe the
//! persisted state rather than a stale in-memory copy.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{data_dir, KeyValueStore};
use crate::error::StorageError;

const STORE_FILE: &str = "store.json";

/// Key-value store persisted as a single JSON object file.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the store at the default data directory, creating it if needed.
    pub fn open() -> Result<Self, StorageError> {
        let dir = data_dir().map_err(|e| StorageError::OpenFailed {
            path: PathBuf::from(STORE_FILE),
            message: e.to_string(),
        })?;
        Ok(Self::with_path(dir.join(STORE_FILE)))
    }

    /// Open a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StorageError::ReadFailed {
                key: String::new(),
                message: e.to_string(),
            })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed {
                key: String::new(),
                message: e.to_string(),
            })?;
        }
        let content = serde_json::to_string_pretty(map).map_err(|e| StorageError::WriteFailed {
            key: String::new(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteFailed {
            key: String::new(),
            message: e.to_string(),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map().unwrap_or_default();
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_map()?.into_keys().collect())
    }
}
