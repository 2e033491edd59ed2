//! Daily content payloads and the content-source seam.
//!
//! The coordinator only cares that some source can produce a structured
//! payload for a (month, day, locale) selector plus a single regional scoop;
//! everything else about the backend is behind [`ContentSource`].

mod http;

pub use http::HttpContentSource;

use std::future::Future;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::clock::Region;
use crate::error::FetchError;

/// Fact categories used by the daily payload.
pub mod category {
    pub const CELEB: &str = "Celeb";
    pub const HISTORY: &str = "History";
    pub const POP_CULTURE: &str = "Pop Culture";
    pub const NATURE_TECH: &str = "Nature & Tech";
}

/// Month/day pair identifying which day's facts to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelector {
    pub month: u32,
    pub day: u32,
}

impl DaySelector {
    /// Selector for the calendar day of `now` as observed in `tz`.
    pub fn from_instant(tz: Tz, now: DateTime<Utc>) -> Self {
        let local = now.with_timezone(&tz);
        Self {
            month: local.month(),
            day: local.day(),
        }
    }
}

/// One categorized item of the daily payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactItem {
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub wikipedia_url: String,
}

/// The daily facts payload: a list of categorized items plus optional
/// singleton fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyFacts {
    #[serde(default)]
    pub items: Vec<FactItem>,
    #[serde(default)]
    pub saint: Option<String>,
    #[serde(default)]
    pub special: Option<String>,
}

impl DailyFacts {
    /// Items belonging to one category, payload order preserved.
    pub fn by_category(&self, category: &str) -> Vec<&FactItem> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    /// The special-occasion label for a date: a movable US holiday computed
    /// locally takes precedence over whatever the payload carries.
    pub fn special_for(&self, selector: DaySelector, year: i32) -> Option<String> {
        movable_holiday(selector.month, selector.day, year)
            .map(str::to_string)
            .or_else(|| self.special.clone())
    }
}

/// The single regional daily scoop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scoop {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub source_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Source of daily content.
pub trait ContentSource: Send + Sync + 'static {
    /// Fetch the facts payload for a month/day in a locale.
    fn daily_facts(
        &self,
        selector: DaySelector,
        locale: &str,
    ) -> impl Future<Output = Result<DailyFacts, FetchError>> + Send;

    /// Fetch the current scoop for a region in a locale.
    fn scoop(
        &self,
        region: Region,
        locale: &str,
    ) -> impl Future<Output = Result<Scoop, FetchError>> + Send;
}

/// Name of the movable US holiday falling on the given date, if any.
pub fn movable_holiday(month: u32, day: u32, year: i32) -> Option<&'static str> {
    use chrono::Weekday;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let weekday = date.weekday();
    let nth = day.div_ceil(7);

    if month == 1 && weekday == Weekday::Mon && nth == 3 {
        return Some("MLK Day");
    }
    if month == 2 && weekday == Weekday::Mon && nth == 3 {
        return Some("Presidents' Day");
    }
    if month == 5 && weekday == Weekday::Mon && day > 24 {
        return Some("Memorial Day");
    }
    if month == 9 && weekday == Weekday::Mon && nth == 1 {
        return Some("Labor Day");
    }
    if month == 11 && weekday == Weekday::Thu && nth == 4 {
        return Some("Thanksgiving");
    }
    let (easter_month, easter_day) = easter(year);
    if month == easter_month && day == easter_day {
        return Some("Easter Sunday");
    }

    None
}

/// Anonymous Gregorian computus.
fn easter(year: i32) -> (u32, u32) {
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let l = i - j;
    let month = 3 + (l + 40) / 44;
    let day = l + 28 - 31 * (month / 4);
    (month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn selector_follows_timezone() {
        // 2025-07-01 03:00 UTC is still June 30 in Chicago.
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 3, 0, 0).unwrap();
        let sel = DaySelector::from_instant(chrono_tz::America::Chicago, now);
        assert_eq!(sel, DaySelector { month: 6, day: 30 });
    }

    #[test]
    fn category_filter() {
        let facts = DailyFacts {
            items: vec![
                FactItem {
                    category: category::HISTORY.to_string(),
                    title: "a".to_string(),
                    content: String::new(),
                    wikipedia_url: String::new(),
                },
                FactItem {
                    category: category::CELEB.to_string(),
                    title: "b".to_string(),
                    content: String::new(),
                    wikipedia_url: String::new(),
                },
            ],
            saint: None,
            special: None,
        };
        assert_eq!(facts.by_category(category::HISTORY).len(), 1);
        assert_eq!(facts.by_category(category::NATURE_TECH).len(), 0);
    }

    #[test]
    fn known_holidays() {
        // Thanksgiving 2025: Thursday, November 27.
        assert_eq!(movable_holiday(11, 27, 2025), Some("Thanksgiving"));
        // MLK Day 2025: Monday, January 20.
        assert_eq!(movable_holiday(1, 20, 2025), Some("MLK Day"));
        // Memorial Day 2025: Monday, May 26.
        assert_eq!(movable_holiday(5, 26, 2025), Some("Memorial Day"));
        // Labor Day 2025: Monday, September 1.
        assert_eq!(movable_holiday(9, 1, 2025), Some("Labor Day"));
        // Easter 2025: Sunday, April 20.
        assert_eq!(movable_holiday(4, 20, 2025), Some("Easter Sunday"));
        // An ordinary day.
        assert_eq!(movable_holiday(6, 15, 2025), None);
    }

    #[test]
    fn easter_dates() {
        assert_eq!(easter(2024), (3, 31));
        assert_eq!(easter(2025), (4, 20));
        assert_eq!(easter(2026), (4, 5));
    }

    #[test]
    fn movable_holiday_overrides_payload_special() {
        let facts = DailyFacts {
            special: Some("Backend Label".to_string()),
            ..Default::default()
        };
        assert_eq!(
            facts.special_for(DaySelector { month: 11, day: 27 }, 2025),
            Some("Thanksgiving".to_string())
        );
        assert_eq!(
            facts.special_for(DaySelector { month: 6, day: 15 }, 2025),
            Some("Backend Label".to_string())
        );
    }
}
