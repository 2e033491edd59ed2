pub mod archive;
pub mod config;
pub mod countdown;
pub mod liked;
pub mod reveal;

use std::sync::Arc;

use briefly_core::{Config, JsonFileStore};

/// Open the shared key-value store for this installation.
pub fn open_store() -> Result<Arc<JsonFileStore>, Box<dyn std::error::Error>> {
    Ok(Arc::new(JsonFileStore::open()?))
}

/// Load config, falling back to defaults on any error.
pub fn load_config() -> Config {
    Config::load_or_default()
}
