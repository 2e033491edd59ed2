//! Core error types for briefly-core.
//!
//! Three taxonomies matter here: storage errors (degraded to empty reads and
//! swallowed writes at the store layer), fetch errors (surfaced to the caller
//! but never allowed to relock a pending reveal), and configuration errors.
//! None of them is fatal to the host process.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for briefly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persistent key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Content-fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from the persistent key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing file could not be opened or created
    #[error("Failed to open store at {path}: {message}")]
    OpenFailed { path: PathBuf, message: String },

    /// A read failed at the IO layer
    #[error("Failed to read key '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// A write failed at the IO layer
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// The store file exists but does not parse
    #[error("Store at {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Errors from the daily content source.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, non-2xx status)
    #[error("Request failed: {0}")]
    Request(String),

    /// The response arrived but did not match the expected payload shape
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// The source has no content published for the requested day
    #[error("No content published for {month:02}-{day:02}")]
    NotFound { month: u32, day: u32 },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Payload(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
