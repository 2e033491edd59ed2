//! Wall-clock, region, and day-stamp arithmetic.
//!
//! Everything temporal in the coordinator reduces to two questions: "what is
//! today's calendar date in a given IANA timezone" and "how long until the
//! next local midnight". Both are pure functions of an injected `now`, so the
//! state machine and scheduler can be tested without real wall-clock delays.

use chrono::{DateTime, Duration, LocalResult, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timezone used when region resolution fails entirely.
pub const DEFAULT_TZ: Tz = chrono_tz::America::Chicago;

/// Safety margin added to every scheduled midnight delay so the timer never
/// fires a hair before the boundary and busy-loops on a zero delay.
pub const MIDNIGHT_MARGIN_SECS: u64 = 1;

/// Content region. Determines which timezone governs the daily boundary and
/// which regional content table is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "EU")]
    Eu,
}

impl Region {
    /// Fixed region-to-timezone table.
    pub fn timezone(self) -> Tz {
        match self {
            Region::Us => chrono_tz::America::Chicago,
            Region::Eu => chrono_tz::Europe::Paris,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Us => write!(f, "US"),
            Region::Eu => write!(f, "EU"),
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(Region::Us),
            "EU" => Ok(Region::Eu),
            other => Err(format!("unknown region: {other}")),
        }
    }
}

/// Map a device IANA timezone name to a content region.
///
/// Anything European resolves to `Eu`; everything else, including names that
/// fail to resolve at all, falls back to `Us`.
pub fn region_from_device_tz(tz_name: &str) -> Region {
    if tz_name.starts_with("Europe/") {
        Region::Eu
    } else {
        Region::Us
    }
}

/// Injectable time source.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Calendar date of `now` as observed in `tz`, formatted `YYYY-MM-DD`.
///
/// This string is the unit of cache and state expiry everywhere in the crate.
pub fn day_stamp(tz: Tz, now: DateTime<Utc>) -> String {
    now.with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Seconds from `now` until the next local midnight in `tz`, strictly after
/// `now`, plus [`MIDNIGHT_MARGIN_SECS`]. Always > 0.
///
/// DST is handled by resolving the naive local midnight through the timezone:
/// an ambiguous midnight takes the earlier instant, and a midnight swallowed
/// by a forward jump slides to the first valid local time after it.
pub fn seconds_until_next_midnight(tz: Tz, now: DateTime<Utc>) -> u64 {
    raw_seconds_to_next_midnight(tz, now).max(0) as u64 + MIDNIGHT_MARGIN_SECS
}

fn raw_seconds_to_next_midnight(tz: Tz, now: DateTime<Utc>) -> i64 {
    let local = now.with_timezone(&tz);
    let next_day = local.date_naive() + Duration::days(1);
    let naive_midnight = match next_day.and_hms_opt(0, 0, 0) {
        Some(t) => t,
        None => return 24 * 3600,
    };

    let instant = match tz.from_local_datetime(&naive_midnight) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // A forward DST jump removed local midnight. Slide forward hour
            // by hour until the local time exists again.
            let mut candidate = None;
            for h in 1..=3 {
                if let LocalResult::Single(t) =
                    tz.from_local_datetime(&(naive_midnight + Duration::hours(h)))
                {
                    candidate = Some(t);
                    break;
                }
            }
            match candidate {
                Some(t) => t,
                None => return 24 * 3600,
            }
        }
    };

    (instant.with_timezone(&Utc) - now).num_seconds()
}

/// The configured unlock instant: a timezone plus a local hour-of-day.
///
/// The timezone here is deliberately independent of the region timezone that
/// governs the daily boundary; the two are configured as one consistent pair
/// rather than assumed equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPoint {
    pub tz: Tz,
    pub hour: u32,
}

impl Default for UnlockPoint {
    fn default() -> Self {
        Self {
            tz: chrono_tz::America::New_York,
            hour: 19,
        }
    }
}

/// Remaining time broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn from_secs(total: i64) -> Self {
        let total = total.max(0) as u64;
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown to the configured unlock instant for the current local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockCountdown {
    /// True once the unlock hour has passed for the local day.
    pub is_past: bool,
    pub remaining: Countdown,
}

/// Time left until the unlock hour in the unlock timezone, or `is_past` once
/// the local clock has reached it.
pub fn countdown_to_unlock(point: UnlockPoint, now: DateTime<Utc>) -> UnlockCountdown {
    let local = now.with_timezone(&point.tz);
    if local.hour() >= point.hour {
        return UnlockCountdown {
            is_past: true,
            remaining: Countdown::ZERO,
        };
    }

    let naive_target = match local.date_naive().and_hms_opt(point.hour, 0, 0) {
        Some(t) => t,
        None => {
            return UnlockCountdown {
                is_past: true,
                remaining: Countdown::ZERO,
            }
        }
    };
    let target = match point.tz.from_local_datetime(&naive_target) {
        LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t,
        LocalResult::None => {
            return UnlockCountdown {
                is_past: true,
                remaining: Countdown::ZERO,
            }
        }
    };

    let secs = (target.with_timezone(&Utc) - now).num_seconds();
    UnlockCountdown {
        is_past: false,
        remaining: Countdown::from_secs(secs),
    }
}

/// Time left until the next local midnight in `tz` (no scheduling margin).
pub fn countdown_to_midnight(tz: Tz, now: DateTime<Utc>) -> Countdown {
    Countdown::from_secs(raw_seconds_to_next_midnight(tz, now))
}
