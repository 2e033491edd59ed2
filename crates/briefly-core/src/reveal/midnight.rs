//! Self-rescheduling midnight timer.
//!
//! A one-shot delay to the next local midnight, re-armed after every firing.
//! The delay is recomputed from the wall clock each iteration, so drift
//! never accumulates. A tick is only a hint: the consumer must compare day
//! stamps before acting, because the host may have suspended timers across
//! any number of midnights.

use chrono::Utc;
use chrono_tz::Tz;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::clock::seconds_until_next_midnight;

/// Marker sent on each (approximate) local-midnight crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidnightTick;

/// Owns the armed timer task. Dropping it cancels the timer.
pub struct MidnightScheduler {
    tz: Tz,
    tick_tx: mpsc::UnboundedSender<MidnightTick>,
    handle: Option<JoinHandle<()>>,
}

impl MidnightScheduler {
    /// Create an unarmed scheduler and the receiver its ticks arrive on.
    pub fn new(tz: Tz) -> (Self, mpsc::UnboundedReceiver<MidnightTick>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        (
            Self {
                tz,
                tick_tx,
                handle: None,
            },
            tick_rx,
        )
    }

    /// Arm (or re-arm) the timer for the next local midnight.
    ///
    /// Cancel-then-set: any previously armed timer is aborted first, so a
    /// foreground re-arm can never produce duplicate firings.
    pub fn arm(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }

        let tz = self.tz;
        let tick_tx = self.tick_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            loop {
                let delay = seconds_until_next_midnight(tz, Utc::now());
                debug!(%tz, delay_secs = delay, "midnight timer armed");
                tokio::time::sleep(tokio::time::Duration::from_secs(delay)).await;
                if tick_tx.send(MidnightTick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the armed timer. No tick fires after this returns.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for MidnightScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
