//! In-memory key-value store for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::StorageError;

/// Non-persistent store. Also supports simulating transient failures so the
/// degradation paths can be exercised.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
    fail_reads: Mutex<bool>,
    fail_writes: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail.
    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) = fail;
    }

    fn check_read(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_reads.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: "simulated read failure".to_string(),
            });
        }
        Ok(())
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_writes.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "simulated write failure".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_read(key)?;
        Ok(self
            .map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.check_read("")?;
        Ok(self
            .map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect())
    }
}
