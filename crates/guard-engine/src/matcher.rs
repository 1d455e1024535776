//! Pair matcher
//!
//! Correlates add/remove notifications: an add opens a pending reaction, a
//! remove claims the most recent matching one and classifies the dwell time.

use guard_core::entities::{AbuseEvent, PendingReaction, ReactionIdentity};
use guard_core::events::ReactionEvent;
use tracing::{debug, info, instrument, warn};

use crate::context::EngineContext;
use crate::error::EngineResult;

/// Pair matcher service
pub struct PairMatcher<'a> {
    ctx: &'a EngineContext,
}

impl<'a> PairMatcher<'a> {
    /// Create a new PairMatcher
    pub fn new(ctx: &'a EngineContext) -> Self {
        Self { ctx }
    }

    /// Record an add notification as a pending reaction
    ///
    /// Adds by the engine's own account and adds with an unparseable emoji
    /// are dropped; neither is an error.
    #[instrument(skip(self, event), fields(user_id = %event.user_id, message_id = %event.message_id))]
    pub async fn ingest_add(&self, event: &ReactionEvent) -> EngineResult<()> {
        let Some(identity) = self.actionable_identity(event) else {
            return Ok(());
        };

        let pending = PendingReaction::new(identity, event.occurred_at);
        self.ctx.pending_repo().insert(&pending).await?;

        debug!(emoji = %pending.identity.emoji_key, "Reaction add recorded");
        Ok(())
    }

    /// Match a remove notification against its pending add and classify
    ///
    /// Returns the recorded abuse event if the dwell time was at or below the
    /// reacted-time threshold. A remove with no matching add is a benign
    /// no-op (restart gap or duplicate gateway delivery).
    #[instrument(skip(self, event), fields(user_id = %event.user_id, message_id = %event.message_id))]
    pub async fn ingest_remove(&self, event: &ReactionEvent) -> EngineResult<Option<AbuseEvent>> {
        let Some(identity) = self.actionable_identity(event) else {
            return Ok(None);
        };

        let Some(matched) = self.ctx.pending_repo().claim_latest(&identity).await? else {
            debug!("No matching reaction add found; skipping removal");
            return Ok(None);
        };

        let dwell = matched.dwell_seconds(event.occurred_at);
        debug!(dwell_seconds = dwell, "Matched add/remove pair");

        if dwell > self.ctx.detection().reacted_time_window_seconds {
            debug!("Removal outside the abuse time window; no action taken");
            return Ok(None);
        }

        let abuse = AbuseEvent::new(identity, event.occurred_at);
        self.ctx.abuse_repo().append(&abuse).await?;

        info!(
            emoji = %abuse.identity.emoji_key,
            dwell_seconds = dwell,
            "Fast reaction removal recorded"
        );
        Ok(Some(abuse))
    }

    /// Apply the self-reaction filter and canonicalize the emoji
    fn actionable_identity(&self, event: &ReactionEvent) -> Option<ReactionIdentity> {
        if event.user_id == self.ctx.self_user_id() {
            debug!("Ignoring our own reaction");
            return None;
        }

        match event.identity() {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "Dropping event with unparseable emoji");
                None
            }
        }
    }
}
