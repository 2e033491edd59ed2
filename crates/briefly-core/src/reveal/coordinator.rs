//! The daily reveal coordinator.
//!
//! Single owner of the unlock/lock state machine. Every transition
//! evaluation starts by re-reading the persisted stamp -- never a captured
//! field -- so a late-arriving fetch completion or a suspended timer cannot
//! resurrect a phase that has since been forced back to `Locked`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::machine::{resolve_phase, Phase};
use super::midnight::{MidnightScheduler, MidnightTick};
use crate::ads::{AdEvent, AdProvider};
use crate::cache::{facts_cache_key, DayCache};
use crate::clock::{
    countdown_to_midnight, countdown_to_unlock, day_stamp, Clock, Countdown, Region, UnlockCountdown,
    UnlockPoint,
};
use crate::content::{ContentSource, DailyFacts, DaySelector};
use crate::error::{FetchError, Result};
use crate::events::Event;
use crate::retention::{ArchiveStore, ArchivedScoop, LikedFact, LikedStore};
use crate::storage::{keys, KeyValueStore};

/// Static coordinator configuration.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    pub region: Region,
    pub locale: String,
    pub unlock: UnlockPoint,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            region: Region::Us,
            locale: "en".to_string(),
            unlock: UnlockPoint::default(),
        }
    }
}

/// Both countdowns the UI renders, as a pure function of "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdowns {
    pub unlock: UnlockCountdown,
    pub midnight: Countdown,
}

/// The reveal coordinator.
///
/// Generic over its four collaborators so tests can inject an in-memory
/// store, a stub content source, a scripted ad provider, and a fixed clock.
pub struct Coordinator<S, C, A, K> {
    store: Arc<S>,
    source: C,
    ads: A,
    clock: Arc<K>,
    cfg: CoordinatorConfig,
    tz: chrono_tz::Tz,
    cache: DayCache<S>,
    liked: LikedStore<S>,
    archive: ArchiveStore<S>,
    phase: Phase,
    ad_ready: bool,
    /// Last day stamp this instance observed; drives rollover detection.
    last_seen_stamp: String,
    scheduler: MidnightScheduler,
    ticks: Option<mpsc::UnboundedReceiver<MidnightTick>>,
    events: mpsc::UnboundedSender<Event>,
    shut_down: bool,
}

impl<S, C, A, K> Coordinator<S, C, A, K>
where
    S: KeyValueStore,
    C: ContentSource,
    A: AdProvider,
    K: Clock,
{
    /// Build a coordinator and the receiver its events arrive on.
    pub fn new(
        store: Arc<S>,
        source: C,
        ads: A,
        clock: Arc<K>,
        cfg: CoordinatorConfig,
    ) -> (Self, mpsc::UnboundedReceiver<Event>) {
        let tz = cfg.region.timezone();
        let (scheduler, ticks) = MidnightScheduler::new(tz);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let last_seen_stamp = day_stamp(tz, clock.now());
        let coordinator = Self {
            cache: DayCache::new(store.clone(), tz),
            liked: LikedStore::new(store.clone()),
            archive: ArchiveStore::new(store.clone(), tz),
            store,
            source,
            ads,
            clock,
            cfg,
            tz,
            phase: Phase::Locked,
            ad_ready: false,
            last_seen_stamp,
            scheduler,
            ticks: Some(ticks),
            events: events_tx,
            shut_down: false,
        };
        (coordinator, events_rx)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn today_stamp(&self) -> String {
        day_stamp(self.tz, self.clock.now())
    }

    /// The persisted last-revealed stamp, re-read from storage.
    pub fn last_revealed(&self) -> Option<String> {
        self.persisted_stamp()
    }

    pub fn countdowns(&self) -> Countdowns {
        let now = self.clock.now();
        Countdowns {
            unlock: countdown_to_unlock(self.cfg.unlock, now),
            midnight: countdown_to_midnight(self.tz, now),
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Start the coordinator: arm the midnight timer and run the startup
    /// evaluation (transition 1).
    pub async fn activate(&mut self) {
        self.scheduler.arm();
        self.evaluate_day().await;
    }

    /// Take the midnight tick receiver. The driver loop forwards each tick
    /// into [`Coordinator::handle_midnight`].
    pub fn midnight_ticks(&mut self) -> Option<mpsc::UnboundedReceiver<MidnightTick>> {
        self.ticks.take()
    }

    /// Tear down: cancel the armed timer and refuse all further
    /// transitions.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.scheduler.shutdown();
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// The user asked to unlock today's content (transition 2).
    ///
    /// With a loaded ad this moves to `AdPending` and waits for
    /// [`AdEvent::Closed`]; without one the reveal completes directly. A
    /// fetch failure is returned but never blocks the reveal itself.
    pub async fn request_unlock(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        let now = self.clock.now();
        let today = day_stamp(self.tz, now);

        // Re-read persisted state first: another handle or an earlier
        // transition may already have revealed today.
        if resolve_phase(self.persisted_stamp().as_deref(), &today) == Phase::Revealed {
            self.set_phase(Phase::Revealed, &today);
            return Ok(());
        }
        if self.phase == Phase::AdPending {
            return Ok(());
        }

        if self.ad_ready && self.ads.show() {
            self.ad_ready = false;
            self.emit(Event::AdShown { at: now });
            self.set_phase(Phase::AdPending, &today);
            return Ok(());
        }

        // No ad ready (or the provider refused): reveal directly.
        self.complete_reveal().await
    }

    /// Forward an ad-lifecycle event from the host (transition 3 on
    /// `Closed`).
    pub async fn handle_ad_event(&mut self, event: AdEvent) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        match event {
            AdEvent::Loaded => {
                self.ad_ready = true;
                Ok(())
            }
            AdEvent::Closed => {
                self.ad_ready = false;
                if self.phase != Phase::AdPending {
                    return Ok(());
                }
                self.complete_reveal().await
            }
        }
    }

    /// A midnight tick fired (transition 4). The tick is only a hint; the
    /// stamp comparison inside the evaluation is authoritative.
    pub async fn handle_midnight(&mut self) {
        if self.shut_down {
            return;
        }
        self.evaluate_day().await;
    }

    /// The app returned to the foreground. Evaluate unconditionally -- a
    /// suspended process may have missed any number of midnights -- then
    /// re-arm the timer.
    pub async fn handle_foreground(&mut self) {
        if self.shut_down {
            return;
        }
        self.evaluate_day().await;
        self.scheduler.arm();
    }

    // ── Content ──────────────────────────────────────────────────────

    /// Fetch today's facts, cache-first, and run the scoop archival pass.
    ///
    /// The facts result is the caller's; the scoop rides along best-effort
    /// because its absence must never fail a reveal.
    pub async fn fetch_daily(&self) -> Result<DailyFacts, FetchError> {
        let now = self.clock.now();
        let today = day_stamp(self.tz, now);
        let selector = DaySelector::from_instant(self.tz, now);
        let key = facts_cache_key(&self.cfg.locale, selector.month, selector.day);

        let facts = match self.cache.get::<DailyFacts>(&key, now) {
            Some(facts) => facts,
            None => match self.source.daily_facts(selector, &self.cfg.locale).await {
                Ok(facts) => {
                    self.cache.set(&key, &facts, now);
                    facts
                }
                Err(e) => {
                    self.emit(Event::FetchFailed {
                        day_stamp: today,
                        message: e.to_string(),
                        at: now,
                    });
                    return Err(e);
                }
            },
        };

        match self.source.scoop(self.cfg.region, &self.cfg.locale).await {
            Ok(scoop) => {
                if self.archive.archive_if_needed(&scoop, now) {
                    if let Some(date) = scoop.date {
                        self.emit(Event::ScoopArchived { date, at: now });
                    }
                }
            }
            Err(e) => debug!(error = %e, "scoop fetch failed"),
        }

        self.emit(Event::ContentFetched {
            day_stamp: today,
            item_count: facts.items.len(),
            at: now,
        });
        Ok(facts)
    }

    // ── Retention passthrough ────────────────────────────────────────

    pub fn liked(&self) -> Vec<LikedFact> {
        self.liked.list()
    }

    pub fn like(&self, title: &str, content: &str, url: &str, category: &str) -> bool {
        self.liked.like(LikedFact::new(
            title,
            content,
            url,
            category,
            self.tz,
            self.clock.now(),
        ))
    }

    pub fn unlike(&self, title: &str) {
        self.liked.unlike(title);
    }

    pub fn is_liked(&self, title: &str) -> bool {
        self.liked.is_liked(title)
    }

    pub fn archives(&self) -> Vec<ArchivedScoop> {
        self.archive.list()
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// One evaluation step: detect rollover, then reconstruct the phase
    /// from the persisted stamp. Handles any number of missed midnights in
    /// a single pass because it only ever compares against "today".
    async fn evaluate_day(&mut self) {
        let now = self.clock.now();
        let today = day_stamp(self.tz, now);

        if self.last_seen_stamp != today {
            let previous = std::mem::replace(&mut self.last_seen_stamp, today.clone());
            self.cache.clear_all();
            self.emit(Event::RolledOver {
                previous_stamp: previous,
                day_stamp: today.clone(),
                at: now,
            });
        }

        match resolve_phase(self.persisted_stamp().as_deref(), &today) {
            Phase::Revealed => {
                // Already revealed today: never regress. Re-fetch to warm
                // the cache, best-effort.
                let _ = self.fetch_daily().await;
                self.set_phase(Phase::Revealed, &today);
            }
            _ => {
                self.set_phase(Phase::Locked, &today);
                if !self.ad_ready {
                    self.ads.request();
                }
            }
        }
    }

    /// Fetch, persist today's stamp, enter `Revealed`. The fetch error (if
    /// any) is surfaced after the transition completes.
    async fn complete_reveal(&mut self) -> Result<()> {
        let now = self.clock.now();
        let today = day_stamp(self.tz, now);

        let fetched = self.fetch_daily().await;

        if let Err(e) = self.store.set_item(keys::LAST_REVEALED_DAY, &today) {
            warn!(error = %e, "failed to persist reveal stamp");
        }
        self.set_phase(Phase::Revealed, &today);

        fetched.map(|_| ()).map_err(Into::into)
    }

    fn persisted_stamp(&self) -> Option<String> {
        match self.store.get_item(keys::LAST_REVEALED_DAY) {
            Ok(stamp) => stamp,
            Err(e) => {
                warn!(error = %e, "failed to read reveal stamp, treating as unrevealed");
                None
            }
        }
    }

    fn set_phase(&mut self, to: Phase, today: &str) {
        if self.phase != to {
            self.emit(Event::PhaseChanged {
                from: self.phase,
                to,
                day_stamp: today.to_string(),
                at: self.clock.now(),
            });
            self.phase = to;
        }
    }

    fn emit(&self, event: Event) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::NoAds;
    use crate::content::{FactItem, Scoop};
    use crate::storage::MemoryStore;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::future::Future;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    const TZ: chrono_tz::Tz = chrono_tz::America::Chicago;

    struct FakeClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl FakeClock {
        fn at(y: i32, m: u32, d: u32, h: u32) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(TZ.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().with_timezone(&Utc)),
            })
        }

        fn advance_days(&self, days: i64) {
            let mut now = self.now.lock().unwrap();
            *now += Duration::days(days);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct StubSource {
        fail_facts: AtomicBool,
        facts_calls: AtomicUsize,
        scoop_date: Mutex<Option<String>>,
    }

    impl ContentSource for StubSource {
        fn daily_facts(
            &self,
            _selector: DaySelector,
            _locale: &str,
        ) -> impl Future<Output = std::result::Result<DailyFacts, FetchError>> + Send {
            self.facts_calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail_facts.load(Ordering::SeqCst);
            async move {
                if fail {
                    Err(FetchError::Request("stub outage".to_string()))
                } else {
                    Ok(DailyFacts {
                        items: vec![FactItem {
                            category: "History".to_string(),
                            title: "T".to_string(),
                            content: "C".to_string(),
                            wikipedia_url: String::new(),
                        }],
                        saint: None,
                        special: None,
                    })
                }
            }
        }

        fn scoop(
            &self,
            _region: Region,
            _locale: &str,
        ) -> impl Future<Output = std::result::Result<Scoop, FetchError>> + Send {
            let date = self.scoop_date.lock().unwrap().clone();
            async move {
                match date {
                    Some(date) => Ok(Scoop {
                        id: 1,
                        title: "Scoop".to_string(),
                        content: "Content".to_string(),
                        category: "News".to_string(),
                        image_url: String::new(),
                        source_name: "Stub".to_string(),
                        url: String::new(),
                        date: Some(date.parse().unwrap()),
                    }),
                    None => Err(FetchError::Request("no scoop".to_string())),
                }
            }
        }
    }

    #[derive(Default)]
    struct StubAds {
        show_result: bool,
        requested: usize,
        shown: usize,
    }

    impl AdProvider for StubAds {
        fn request(&mut self) {
            self.requested += 1;
        }

        fn show(&mut self) -> bool {
            if self.show_result {
                self.shown += 1;
            }
            self.show_result
        }
    }

    type TestCoordinator<A> = Coordinator<MemoryStore, StubSource, A, FakeClock>;

    fn coordinator_with_ads<A: AdProvider>(
        clock: Arc<FakeClock>,
        ads: A,
    ) -> (
        Arc<MemoryStore>,
        TestCoordinator<A>,
        mpsc::UnboundedReceiver<Event>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let (coordinator, events) = Coordinator::new(
            store.clone(),
            StubSource::default(),
            ads,
            clock,
            CoordinatorConfig::default(),
        );
        (store, coordinator, events)
    }

    fn coordinator(
        clock: Arc<FakeClock>,
    ) -> (
        Arc<MemoryStore>,
        TestCoordinator<NoAds>,
        mpsc::UnboundedReceiver<Event>,
    ) {
        coordinator_with_ads(clock, NoAds)
    }

    fn drain(events: &mut mpsc::UnboundedReceiver<Event>) -> Vec<Event> {
        let mut out = Vec::new();
        while let Ok(event) = events.try_recv() {
            out.push(event);
        }
        out
    }

    #[tokio::test]
    async fn unlock_without_ad_reveals_and_persists_stamp() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, _events) = coordinator(clock);

        assert_eq!(c.phase(), Phase::Locked);
        c.request_unlock().await.unwrap();

        assert_eq!(c.phase(), Phase::Revealed);
        assert_eq!(
            store.get_item(keys::LAST_REVEALED_DAY).unwrap().as_deref(),
            Some("2025-06-15")
        );
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn startup_with_matching_stamp_resumes_revealed() {
        let clock = FakeClock::at(2025, 6, 15, 20);
        let (store, mut c, _events) = coordinator(clock);
        store
            .set_item(keys::LAST_REVEALED_DAY, "2025-06-15")
            .unwrap();

        c.activate().await;

        assert_eq!(c.phase(), Phase::Revealed);
        // Content was re-fetched to warm the cache.
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 1);
        c.shutdown();
    }

    #[tokio::test]
    async fn startup_with_stale_stamp_locks() {
        let clock = FakeClock::at(2025, 6, 15, 20);
        let (store, mut c, _events) = coordinator(clock);
        store
            .set_item(keys::LAST_REVEALED_DAY, "2025-06-14")
            .unwrap();

        c.activate().await;

        assert_eq!(c.phase(), Phase::Locked);
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 0);
        c.shutdown();
    }

    #[tokio::test]
    async fn midnight_rollover_relocks_and_clears_cache() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, mut events) = coordinator(clock.clone());

        c.request_unlock().await.unwrap();
        assert_eq!(c.phase(), Phase::Revealed);
        let cache_key = facts_cache_key("en", 6, 15);
        assert!(store.get_item(&cache_key).unwrap().is_some());
        drain(&mut events);

        clock.advance_days(1);
        c.handle_midnight().await;

        assert_eq!(c.phase(), Phase::Locked);
        assert!(store.get_item(&cache_key).unwrap().is_none());
        let seen = drain(&mut events);
        assert!(seen.iter().any(|e| matches!(
            e,
            Event::RolledOver { previous_stamp, day_stamp, .. }
                if previous_stamp == "2025-06-15" && day_stamp == "2025-06-16"
        )));
        assert!(seen.iter().any(|e| matches!(
            e,
            Event::PhaseChanged { to: Phase::Locked, .. }
        )));
    }

    #[tokio::test]
    async fn foreground_recovery_after_two_missed_midnights() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, mut events) = coordinator(clock.clone());

        c.request_unlock().await.unwrap();
        drain(&mut events);

        // Suspended across two midnights; no timer fired.
        clock.advance_days(2);
        c.handle_foreground().await;

        assert_eq!(c.phase(), Phase::Locked);
        assert_eq!(
            store.get_item(keys::LAST_REVEALED_DAY).unwrap().as_deref(),
            Some("2025-06-15")
        );
        // A single evaluation lands directly on D+2.
        let seen = drain(&mut events);
        assert!(seen.iter().any(|e| matches!(
            e,
            Event::RolledOver { day_stamp, .. } if day_stamp == "2025-06-17"
        )));
        c.shutdown();
    }

    #[tokio::test]
    async fn ad_flow_reveals_on_close() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, mut events) = coordinator_with_ads(
            clock,
            StubAds {
                show_result: true,
                ..Default::default()
            },
        );

        c.handle_ad_event(AdEvent::Loaded).await.unwrap();
        c.request_unlock().await.unwrap();
        assert_eq!(c.phase(), Phase::AdPending);
        assert_eq!(c.ads.shown, 1);
        // Content is not fetched until the ad closes.
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 0);

        c.handle_ad_event(AdEvent::Closed).await.unwrap();
        assert_eq!(c.phase(), Phase::Revealed);
        assert_eq!(
            store.get_item(keys::LAST_REVEALED_DAY).unwrap().as_deref(),
            Some("2025-06-15")
        );
        let seen = drain(&mut events);
        assert!(seen.iter().any(|e| matches!(e, Event::AdShown { .. })));
    }

    #[tokio::test]
    async fn fetch_failure_after_ad_still_reveals() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, mut events) = coordinator_with_ads(
            clock,
            StubAds {
                show_result: true,
                ..Default::default()
            },
        );
        c.source.fail_facts.store(true, Ordering::SeqCst);

        c.handle_ad_event(AdEvent::Loaded).await.unwrap();
        c.request_unlock().await.unwrap();
        let result = c.handle_ad_event(AdEvent::Closed).await;

        // The error surfaces, but the user is not locked out again.
        assert!(result.is_err());
        assert_eq!(c.phase(), Phase::Revealed);
        assert_eq!(
            store.get_item(keys::LAST_REVEALED_DAY).unwrap().as_deref(),
            Some("2025-06-15")
        );
        assert!(drain(&mut events)
            .iter()
            .any(|e| matches!(e, Event::FetchFailed { .. })));
    }

    #[tokio::test]
    async fn unlock_is_noop_while_ad_pending() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (_store, mut c, _events) = coordinator_with_ads(
            clock,
            StubAds {
                show_result: true,
                ..Default::default()
            },
        );

        c.handle_ad_event(AdEvent::Loaded).await.unwrap();
        c.request_unlock().await.unwrap();
        c.request_unlock().await.unwrap();

        assert_eq!(c.phase(), Phase::AdPending);
        assert_eq!(c.ads.shown, 1);
    }

    #[tokio::test]
    async fn unlock_rereads_persisted_state() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, _events) = coordinator(clock);

        // Another handle already revealed today.
        store
            .set_item(keys::LAST_REVEALED_DAY, "2025-06-15")
            .unwrap();
        c.request_unlock().await.unwrap();

        assert_eq!(c.phase(), Phase::Revealed);
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn no_transition_after_shutdown() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, _events) = coordinator(clock.clone());

        c.shutdown();
        c.request_unlock().await.unwrap();
        clock.advance_days(1);
        c.handle_midnight().await;

        assert_eq!(c.phase(), Phase::Locked);
        assert_eq!(store.get_item(keys::LAST_REVEALED_DAY).unwrap(), None);
        assert_eq!(c.source.facts_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn locked_evaluation_requests_an_ad() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (_store, mut c, _events) = coordinator_with_ads(clock, StubAds::default());

        c.activate().await;

        assert_eq!(c.phase(), Phase::Locked);
        assert!(c.ads.requested >= 1);
        c.shutdown();
    }

    #[tokio::test]
    async fn reveal_archives_previous_day_scoop() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (_store, mut c, mut events) = coordinator(clock);
        *c.source.scoop_date.lock().unwrap() = Some("2025-06-14".to_string());

        c.request_unlock().await.unwrap();

        let archives = c.archives();
        assert_eq!(archives.len(), 1);
        assert_eq!(archives[0].date.to_string(), "2025-06-14");
        assert!(drain(&mut events)
            .iter()
            .any(|e| matches!(e, Event::ScoopArchived { .. })));
    }

    #[tokio::test]
    async fn storage_write_failure_does_not_crash_the_reveal() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (store, mut c, _events) = coordinator(clock);
        store.set_fail_writes(true);

        // Stamp persistence fails silently; the in-memory phase still
        // completes so the user sees their content.
        c.request_unlock().await.unwrap();
        assert_eq!(c.phase(), Phase::Revealed);
    }

    #[tokio::test]
    async fn countdowns_are_a_pure_function_of_now() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (_store, c, _events) = coordinator(clock);

        let first = c.countdowns();
        let second = c.countdowns();
        assert_eq!(first, second);
        assert!(first.midnight.total_secs() > 0);
    }

    #[tokio::test]
    async fn like_passthrough_uses_coordinator_clock() {
        let clock = FakeClock::at(2025, 6, 15, 18);
        let (_store, c, _events) = coordinator(clock);

        assert!(c.like("T", "C", "https://u", "History"));
        assert!(!c.like("T", "C", "https://u", "History"));
        let liked = c.liked();
        assert_eq!(liked.len(), 1);
        assert_eq!(liked[0].month, 6);
        assert_eq!(liked[0].day, 15);
        c.unlike("T");
        assert!(!c.is_liked("T"));
    }
}
