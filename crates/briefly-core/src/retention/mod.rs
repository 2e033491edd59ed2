//! Bounded, persisted retention logs.
//!
//! Two stores share one discipline: append-to-front, idempotent per logical
//! key, hard-capped (per category for likes, total for archives), and
//! re-read from persistence on every call. Storage failures degrade -- reads
//! become empty lists, writes are logged and dropped -- so the UI layer can
//! never crash on a transiently unavailable store.

mod archive;
mod liked;

pub use archive::{ArchiveStore, ArchivedScoop, MAX_ARCHIVES};
pub use liked::{LikedFact, LikedStore, MAX_LIKES_PER_CATEGORY};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::storage::KeyValueStore;

fn load_entries<S: KeyValueStore, E: DeserializeOwned>(store: &S, key: &str) -> Vec<E> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "retention read failed, treating as empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(key, error = %e, "retention log undecodable, treating as empty");
            Vec::new()
        }
    }
}

fn save_entries<S: KeyValueStore, E: Serialize>(store: &S, key: &str, entries: &[E]) {
    let raw = match serde_json::to_string(entries) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "retention serialize failed, dropping write");
            return;
        }
    };
    if let Err(e) = store.set_item(key, &raw) {
        warn!(key, error = %e, "retention write failed, dropping write");
    }
}
