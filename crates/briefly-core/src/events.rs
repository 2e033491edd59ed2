//! Coordinator events.
//!
//! Every observable side effect of the reveal state machine produces an
//! event on an unbounded channel; the UI layer renders from these instead of
//! polling internal state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::reveal::Phase;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// The reveal phase changed.
    PhaseChanged {
        from: Phase,
        to: Phase,
        day_stamp: String,
        at: DateTime<Utc>,
    },
    /// A day boundary was observed, by timer or by foreground re-check.
    RolledOver {
        previous_stamp: String,
        day_stamp: String,
        at: DateTime<Utc>,
    },
    /// Daily content landed (fresh fetch or warm cache).
    ContentFetched {
        day_stamp: String,
        item_count: usize,
        at: DateTime<Utc>,
    },
    /// A content fetch failed. The reveal still completes; this is the
    /// error-surfacing side of that trade-off.
    FetchFailed {
        day_stamp: String,
        message: String,
        at: DateTime<Utc>,
    },
    /// An interstitial was handed to the SDK for display.
    AdShown { at: DateTime<Utc> },
    /// A previous day's scoop was moved into the archive.
    ScoopArchived { date: NaiveDate, at: DateTime<Utc> },
}
