//! Readiness-gated periodic tasks
//!
//! Both scheduled tasks park until the host signals readiness (gateway
//! connected), then tick on a fixed interval until shutdown. Ticks run to
//! completion before the shutdown branch is taken, and a missed tick is
//! delayed rather than burst, so a task is never re-entered concurrently
//! with itself.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error};

use crate::error::EngineResult;

/// Spawn a named periodic task gated on a readiness signal
///
/// The task waits for `ready` to become true, then runs `tick` every
/// `period` (first run immediately after readiness). A tick returning `Err`
/// is logged and aborts that tick only. The task exits when `shutdown`
/// becomes true or either sender is dropped, finishing any in-flight tick
/// first.
pub fn spawn_gated<F, Fut>(
    name: &'static str,
    period: Duration,
    mut ready: watch::Receiver<bool>,
    mut shutdown: watch::Receiver<bool>,
    mut tick: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = EngineResult<()>> + Send,
{
    tokio::spawn(async move {
        // Park until readiness fires; shutdown may arrive first.
        loop {
            if *shutdown.borrow() {
                return;
            }
            if *ready.borrow() {
                break;
            }
            tokio::select! {
                changed = ready.changed() => {
                    if changed.is_err() {
                        return;
                    }
                }
                _ = shutdown.changed() => return,
            }
        }

        debug!(task = name, period_seconds = period.as_secs(), "Scheduled task started");

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Sender dropped counts as shutdown too
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {
                    if let Err(e) = tick().await {
                        error!(task = name, error = %e, "Scheduled tick failed");
                    }
                }
            }
        }

        debug!(task = name, "Scheduled task stopped");
    })
}
