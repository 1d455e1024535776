//! Retention sweeper
//!
//! Storage hygiene only: deletes abuse events older than the retention
//! horizon (warning window times the retention multiplier). Never touches
//! alerting state, and pending reactions are not swept.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument};

use crate::context::EngineContext;
use crate::error::EngineResult;

/// Retention sweeper service
pub struct RetentionSweeper<'a> {
    ctx: &'a EngineContext,
}

impl<'a> RetentionSweeper<'a> {
    /// Create a new RetentionSweeper
    pub fn new(ctx: &'a EngineContext) -> Self {
        Self { ctx }
    }

    /// One scheduled sweep; returns the number of events deleted
    ///
    /// The cutoff comparison is strict, so an event aged exactly at the
    /// horizon survives until the next sweep.
    #[instrument(skip(self))]
    pub async fn run_once(&self, now: DateTime<Utc>) -> EngineResult<u64> {
        let horizon_seconds = self.ctx.detection().retention_horizon_seconds();
        let cutoff = now - Duration::milliseconds((horizon_seconds * 1000.0) as i64);

        let deleted = self.ctx.abuse_repo().prune_older_than(cutoff).await?;
        info!(deleted, horizon_seconds, "Pruned aged abuse events");

        Ok(deleted)
    }
}
