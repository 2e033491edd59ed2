//! Day-keyed content cache.
//!
//! Entries carry the day stamp of the day they were written. A read on any
//! later day is a miss and evicts the entry (lazy expiry -- there is no
//! background sweep), so cached content can never leak across a day boundary
//! even if the midnight timer is delayed or never fires.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::clock::day_stamp;
use crate::storage::{keys, KeyValueStore};

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry<T> {
    data: T,
    day_stamp: String,
}

/// Cache over the key-value store, scoped to one timezone's calendar day.
pub struct DayCache<S> {
    store: Arc<S>,
    tz: Tz,
}

impl<S: KeyValueStore> DayCache<S> {
    pub fn new(store: Arc<S>, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// Read a cached value. Misses on absence, a stale day stamp, or an
    /// undecodable entry; stale and undecodable entries are evicted.
    /// Storage read errors are logged and reported as a miss.
    pub fn get<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(_) => {
                self.evict(key);
                return None;
            }
        };

        if entry.day_stamp == day_stamp(self.tz, now) {
            Some(entry.data)
        } else {
            self.evict(key);
            None
        }
    }

    /// Store a value stamped with today. Write errors are logged and
    /// swallowed; losing one cache write is acceptable.
    pub fn set<T: Serialize>(&self, key: &str, data: &T, now: DateTime<Utc>) {
        let entry = CacheEntry {
            data,
            day_stamp: day_stamp(self.tz, now),
        };
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "cache serialize failed");
                return;
            }
        };
        if let Err(e) = self.store.set_item(key, &raw) {
            warn!(key, error = %e, "cache write failed");
        }
    }

    /// Remove every cache entry regardless of its day stamp.
    pub fn clear_all(&self) {
        let all_keys = match self.store.keys() {
            Ok(all_keys) => all_keys,
            Err(e) => {
                warn!(error = %e, "cache clear failed to enumerate keys");
                return;
            }
        };
        for key in all_keys {
            if key.starts_with(keys::CACHE_PREFIX) {
                self.evict(&key);
            }
        }
    }

    fn evict(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            warn!(key, error = %e, "cache evict failed");
        }
    }
}

/// Cache key for a day's facts query, namespaced by everything that affects
/// content identity so distinct queries never collide.
pub fn facts_cache_key(locale: &str, month: u32, day: u32) -> String {
    format!("{}daily_facts_{locale}_{month}_{day}", keys::CACHE_PREFIX)
}
