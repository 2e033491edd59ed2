//! Persistent key-value storage.
//!
//! Everything the coordinator persists -- the last-revealed day stamp, the
//! retention logs, the day-keyed cache entries -- goes through the
//! [`KeyValueStore`] seam so tests can swap in an in-memory store and the
//! state machine never touches the filesystem directly.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Logical storage keys.
pub mod keys {
    /// Day stamp of the last completed reveal.
    pub const LAST_REVEALED_DAY: &str = "last_revealed_date";
    /// Liked-facts retention log.
    pub const LIKED_FACTS: &str = "liked_facts";
    /// Archived daily-scoop retention log.
    pub const SCOOP_ARCHIVE: &str = "scoops_archive";
    /// Prefix shared by all day-keyed cache entries.
    pub const CACHE_PREFIX: &str = "cache_";
}

/// String key-value store with enumerable keys.
///
/// All operations may fail; callers in this crate degrade reads to "empty"
/// and swallow (but log) write failures rather than crash.
pub trait KeyValueStore: Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// Returns `~/.config/briefly[-dev]/` based on BRIEFLY_ENV.
///
/// Set BRIEFLY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("BRIEFLY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("briefly-dev")
    } else {
        base_dir.join("briefly")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
