//! Phase rules for the daily reveal.
//!
//! The phase is never persisted. It is reconstructed from one persisted
//! string -- the last-revealed day stamp -- compared against today's stamp,
//! which is what makes restarts, suspended timers, and clock ambiguity safe:
//! the authoritative check is always "compare stamps", never "trust elapsed
//! time".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reveal phase for the current local day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Content hidden; countdown or ad gate shown.
    Locked,
    /// An interstitial is loading/showing; content not yet fetched.
    AdPending,
    /// Content shown for the remainder of the local day.
    Revealed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Locked => write!(f, "locked"),
            Phase::AdPending => write!(f, "ad_pending"),
            Phase::Revealed => write!(f, "revealed"),
        }
    }
}

/// Reconstruct the phase from the persisted stamp and today's stamp.
///
/// `Revealed` if and only if the stamps match; any mismatch (including a
/// missing stamp) forces `Locked`. `AdPending` is inherently transient and
/// never survives an evaluation.
pub fn resolve_phase(last_revealed: Option<&str>, today: &str) -> Phase {
    match last_revealed {
        Some(stamp) if stamp == today => Phase::Revealed,
        _ => Phase::Locked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_stamp_is_revealed() {
        assert_eq!(
            resolve_phase(Some("2025-06-15"), "2025-06-15"),
            Phase::Revealed
        );
    }

    #[test]
    fn any_mismatch_is_locked() {
        assert_eq!(
            resolve_phase(Some("2025-06-14"), "2025-06-15"),
            Phase::Locked
        );
        // A stamp from the future (clock rolled back) also locks.
        assert_eq!(
            resolve_phase(Some("2025-06-16"), "2025-06-15"),
            Phase::Locked
        );
        assert_eq!(resolve_phase(None, "2025-06-15"), Phase::Locked);
    }

    #[test]
    fn phase_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Phase::AdPending).unwrap(),
            "\"ad_pending\""
        );
    }
}
