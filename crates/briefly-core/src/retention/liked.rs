//! Liked-facts retention store.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{load_entries, save_entries};
use crate::storage::{keys, KeyValueStore};

/// Hard cap enforced independently per category.
pub const MAX_LIKES_PER_CATEGORY: usize = 20;

/// A fact the user liked. Keyed by `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedFact {
    pub title: String,
    pub content: String,
    pub url: String,
    pub day: u32,
    pub month: u32,
    pub category: String,
    pub liked_at: DateTime<Utc>,
}

impl LikedFact {
    /// Build a fact stamped with the current month/day as observed in `tz`.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        category: impl Into<String>,
        tz: Tz,
        now: DateTime<Utc>,
    ) -> Self {
        let local = now.with_timezone(&tz);
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            day: local.day(),
            month: local.month(),
            category: category.into(),
            liked_at: now,
        }
    }
}

/// Persisted log of liked facts, most-recent-first, capped per category.
pub struct LikedStore<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> LikedStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All liked facts, most recently liked first.
    pub fn list(&self) -> Vec<LikedFact> {
        load_entries(self.store.as_ref(), keys::LIKED_FACTS)
    }

    /// Record a like. Idempotent per title: returns false and changes
    /// nothing if the title is already liked. On insert, the oldest likes
    /// beyond [`MAX_LIKES_PER_CATEGORY`] in the fact's category are evicted.
    pub fn like(&self, fact: LikedFact) -> bool {
        let mut entries = self.list();
        if entries.iter().any(|f| f.title == fact.title) {
            return false;
        }

        let category = fact.category.clone();
        entries.insert(0, fact);

        // Entries are newest-first, so retaining the first N of the category
        // keeps the most recently liked ones.
        let mut kept = 0usize;
        entries.retain(|f| {
            if f.category == category {
                kept += 1;
                kept <= MAX_LIKES_PER_CATEGORY
            } else {
                true
            }
        });

        save_entries(self.store.as_ref(), keys::LIKED_FACTS, &entries);
        true
    }

    /// Remove a like by title. No-op if absent.
    pub fn unlike(&self, title: &str) {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|f| f.title != title);
        if entries.len() != before {
            save_entries(self.store.as_ref(), keys::LIKED_FACTS, &entries);
        }
    }

    pub fn is_liked(&self, title: &str) -> bool {
        self.list().iter().any(|f| f.title == title)
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }

    pub fn count_by_category(&self, category: &str) -> usize {
        self.list()
            .iter()
            .filter(|f| f.category == category)
            .count()
    }
}
