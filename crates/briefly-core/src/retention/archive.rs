//! Archived daily-scoop retention store.
//!
//! When a fetched scoop turns out to be from a previous day (the backend has
//! not rolled yet, or the user is catching up), it is archived instead of
//! discarded. The archive is tiny and capped: the five most recent days.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{load_entries, save_entries};
use crate::content::Scoop;
use crate::storage::{keys, KeyValueStore};

/// Hard cap on the whole archive.
pub const MAX_ARCHIVES: usize = 5;

/// An archived scoop. Keyed by content `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedScoop {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image_url: String,
    pub source_name: String,
    pub url: String,
    pub date: NaiveDate,
    pub archived_at: DateTime<Utc>,
}

/// Persisted scoop archive, capped at [`MAX_ARCHIVES`] and sorted by content
/// date descending on every read.
pub struct ArchiveStore<S> {
    store: Arc<S>,
    tz: Tz,
}

impl<S: KeyValueStore> ArchiveStore<S> {
    pub fn new(store: Arc<S>, tz: Tz) -> Self {
        Self { store, tz }
    }

    /// All archived scoops, newest content date first.
    pub fn list(&self) -> Vec<ArchivedScoop> {
        let mut entries: Vec<ArchivedScoop> =
            load_entries(self.store.as_ref(), keys::SCOOP_ARCHIVE);
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Archive a scoop if its content date is strictly before today in the
    /// store's timezone. Deduplicates by date and enforces the cap. Returns
    /// true when a new entry was recorded.
    pub fn archive_if_needed(&self, scoop: &Scoop, now: DateTime<Utc>) -> bool {
        let Some(date) = scoop.date else {
            return false;
        };
        let today = now.with_timezone(&self.tz).date_naive();
        if date >= today {
            return false;
        }

        let mut entries: Vec<ArchivedScoop> =
            load_entries(self.store.as_ref(), keys::SCOOP_ARCHIVE);
        if entries.iter().any(|e| e.date == date) {
            return false;
        }

        entries.insert(
            0,
            ArchivedScoop {
                id: scoop.id,
                title: scoop.title.clone(),
                content: scoop.content.clone(),
                category: scoop.category.clone(),
                image_url: scoop.image_url.clone(),
                source_name: scoop.source_name.clone(),
                url: scoop.url.clone(),
                date,
                archived_at: now,
            },
        );
        entries.truncate(MAX_ARCHIVES);

        save_entries(self.store.as_ref(), keys::SCOOP_ARCHIVE, &entries);
        true
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    const TZ: Tz = chrono_tz::America::Chicago;

    fn store() -> ArchiveStore<MemoryStore> {
        ArchiveStore::new(Arc::new(MemoryStore::new()), TZ)
    }

    fn scoop(date: Option<&str>) -> Scoop {
        Scoop {
            id: 1,
            title: "Title".to_string(),
            content: "Content".to_string(),
            category: "History".to_string(),
            image_url: String::new(),
            source_name: "Source".to_string(),
            url: "https://example.org".to_string(),
            date: date.map(|d| d.parse().unwrap()),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        TZ.with_ymd_and_hms(y, m, d, 12, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn todays_scoop_is_not_archived() {
        let archive = store();
        assert!(!archive.archive_if_needed(&scoop(Some("2025-06-15")), noon(2025, 6, 15)));
        assert_eq!(archive.count(), 0);
    }

    #[test]
    fn dateless_scoop_is_ignored() {
        let archive = store();
        assert!(!archive.archive_if_needed(&scoop(None), noon(2025, 6, 15)));
    }

    #[test]
    fn yesterdays_scoop_is_archived_once() {
        let archive = store();
        let now = noon(2025, 6, 15);
        assert!(archive.archive_if_needed(&scoop(Some("2025-06-14")), now));
        assert!(!archive.archive_if_needed(&scoop(Some("2025-06-14")), now));
        assert_eq!(archive.count(), 1);
    }

    #[test]
    fn cap_and_date_ordering() {
        let archive = store();
        let now = noon(2025, 6, 20);
        // Insert out of order to prove list() sorts by content date.
        for day in [12, 10, 14, 11, 13, 15] {
            archive.archive_if_needed(&scoop(Some(&format!("2025-06-{day:02}"))), now);
        }

        let entries = archive.list();
        assert_eq!(entries.len(), MAX_ARCHIVES);
        let dates: Vec<String> = entries.iter().map(|e| e.date.to_string()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        // No duplicate dates.
        let mut unique = dates.clone();
        unique.dedup();
        assert_eq!(unique.len(), dates.len());
    }
}
