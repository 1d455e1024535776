//! Engine runtime
//!
//! Owns the two scheduled tasks and the readiness/shutdown signals. The host
//! embeds an [`Engine`], feeds it gateway notifications, calls
//! [`Engine::signal_ready`] once the gateway connection is established, and
//! awaits [`Engine::shutdown`] on exit.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use guard_common::ScheduleConfig;
use guard_core::entities::AbuseEvent;
use guard_core::events::ReactionEvent;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::aggregator::WindowAggregator;
use crate::context::EngineContext;
use crate::error::EngineResult;
use crate::matcher::PairMatcher;
use crate::scheduler::spawn_gated;
use crate::sweeper::RetentionSweeper;

/// The assembled correlation engine
pub struct Engine {
    ctx: Arc<EngineContext>,
    ready_tx: watch::Sender<bool>,
    shutdown_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl Engine {
    /// Start the engine: spawns the aggregator and sweeper tasks, parked
    /// until [`Engine::signal_ready`]
    pub fn start(ctx: Arc<EngineContext>, schedule: &ScheduleConfig) -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let aggregator_ctx = Arc::clone(&ctx);
        let aggregator = spawn_gated(
            "window-aggregator",
            Duration::from_secs(schedule.aggregation_interval_seconds),
            ready_rx.clone(),
            shutdown_rx.clone(),
            move || {
                let ctx = Arc::clone(&aggregator_ctx);
                async move {
                    WindowAggregator::new(&ctx).run_once(Utc::now()).await?;
                    Ok(())
                }
            },
        );

        let sweeper_ctx = Arc::clone(&ctx);
        let sweeper = spawn_gated(
            "retention-sweeper",
            Duration::from_secs(schedule.sweep_interval_seconds),
            ready_rx,
            shutdown_rx,
            move || {
                let ctx = Arc::clone(&sweeper_ctx);
                async move {
                    RetentionSweeper::new(&ctx).run_once(Utc::now()).await?;
                    Ok(())
                }
            },
        );

        Self {
            ctx,
            ready_tx,
            shutdown_tx,
            tasks: vec![aggregator, sweeper],
        }
    }

    /// Handle a reaction add notification from the gateway
    pub async fn handle_add(&self, event: &ReactionEvent) -> EngineResult<()> {
        PairMatcher::new(&self.ctx).ingest_add(event).await
    }

    /// Handle a reaction remove notification from the gateway
    pub async fn handle_remove(&self, event: &ReactionEvent) -> EngineResult<Option<AbuseEvent>> {
        PairMatcher::new(&self.ctx).ingest_remove(event).await
    }

    /// Unpark the scheduled tasks once the surrounding system is ready
    pub fn signal_ready(&self) {
        info!("Engine ready; scheduled tasks unparked");
        let _ = self.ready_tx.send(true);
    }

    /// Stop both scheduled tasks, waiting for any in-flight tick to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
        info!("Engine stopped");
    }

    /// Access the engine context (for on-demand operator queries)
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}
