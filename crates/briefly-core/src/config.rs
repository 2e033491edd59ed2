//! TOML-based application configuration.
//!
//! Stored at `~/.config/briefly/config.toml`. Covers the region that
//! governs the daily boundary, the content locale, the unlock instant as a
//! (timezone, hour) pair, and the content backend base URL.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clock::{Region, UnlockPoint};
use crate::error::ConfigError;
use crate::storage::data_dir;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub region: Region,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Local hour (0-23) at which the daily content unlocks.
    #[serde(default = "default_unlock_hour")]
    pub unlock_hour: u32,
    /// IANA timezone the unlock hour is read in.
    #[serde(default = "default_unlock_tz")]
    pub unlock_tz: String,
    /// Base URL of the content backend.
    #[serde(default = "default_content_url")]
    pub content_url: String,
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_unlock_hour() -> u32 {
    19
}

fn default_unlock_tz() -> String {
    "America/New_York".to_string()
}

fn default_content_url() -> String {
    "https://content.briefly.example".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: Region::Us,
            locale: default_locale(),
            unlock_hour: default_unlock_hour(),
            unlock_tz: default_unlock_tz(),
            content_url: default_content_url(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// The configured unlock instant. An unparseable timezone falls back to
    /// the default pair rather than propagating.
    pub fn unlock_point(&self) -> UnlockPoint {
        let default = UnlockPoint::default();
        let tz = chrono_tz::Tz::from_str(&self.unlock_tz).unwrap_or(default.tz);
        let hour = if self.unlock_hour < 24 {
            self.unlock_hour
        } else {
            default.hour
        };
        UnlockPoint { tz, hour }
    }

    /// Get a config value as string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "region" => Some(self.region.to_string()),
            "locale" => Some(self.locale.clone()),
            "unlock_hour" => Some(self.unlock_hour.to_string()),
            "unlock_tz" => Some(self.unlock_tz.clone()),
            "content_url" => Some(self.content_url.clone()),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "region" => {
                self.region = value.parse().map_err(|e: String| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e,
                })?;
            }
            "locale" => self.locale = value.to_string(),
            "unlock_hour" => {
                let hour: u32 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("not an hour: {value}"),
                })?;
                if hour >= 24 {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        message: format!("hour out of range: {hour}"),
                    });
                }
                self.unlock_hour = hour;
            }
            "unlock_tz" => {
                chrono_tz::Tz::from_str(value).map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("unknown timezone: {value}"),
                })?;
                self.unlock_tz = value.to_string();
            }
            "content_url" => self.content_url = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }

    /// All key/value pairs, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["region", "locale", "unlock_hour", "unlock_tz", "content_url"]
            .into_iter()
            .filter_map(|k| self.get(k).map(|v| (k, v)))
            .collect()
    }
}
