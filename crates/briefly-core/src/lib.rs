//! # Briefly Core Library
//!
//! Core business logic for Briefly's daily gated content ("the Scoop"):
//! content unlocks at a fixed wall-clock hour, stays unlocked until the next
//! local day boundary, and re-locks exactly once per calendar day in the
//! configured region -- surviving restarts, background/foreground cycles,
//! and clock or timezone ambiguity. The UI shell is a thin layer over this
//! crate.
//!
//! ## Architecture
//!
//! - **Reveal Coordinator**: the LOCKED / AD_PENDING / REVEALED state
//!   machine; the phase is never persisted, only the last-revealed day
//!   stamp, and every transition re-reads it
//! - **Midnight Scheduler**: a self-rescheduling one-shot timer to the next
//!   local midnight, re-verified on every foreground because host timers
//!   are not guaranteed while suspended
//! - **Day-Keyed Cache**: lazily-expiring per-day content cache
//! - **Retention Stores**: capped persisted logs of liked facts (per
//!   category) and archived scoops (total)
//!
//! ## Key Components
//!
//! - [`Coordinator`]: the reveal state machine and its side effects
//! - [`MidnightScheduler`]: day-boundary timer
//! - [`KeyValueStore`]: persistence seam
//! - [`ContentSource`]: content backend seam

pub mod ads;
pub mod cache;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod retention;
pub mod reveal;
pub mod storage;

pub use ads::{AdEvent, AdProvider, NoAds};
pub use cache::DayCache;
pub use clock::{Clock, Countdown, Region, SystemClock, UnlockCountdown, UnlockPoint};
pub use config::Config;
pub use content::{ContentSource, DailyFacts, DaySelector, FactItem, HttpContentSource, Scoop};
pub use error::{ConfigError, CoreError, FetchError, Result, StorageError};
pub use events::Event;
pub use retention::{ArchiveStore, ArchivedScoop, LikedFact, LikedStore};
pub use reveal::{Coordinator, CoordinatorConfig, Countdowns, MidnightScheduler, Phase};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
