//! Window aggregator
//!
//! Scheduled flagging pass: counts abuse events per user over the trailing
//! warning window, emits one alert per user whose count strictly exceeds the
//! allowed maximum, and purges all of that user's events after the alert is
//! confirmed delivered.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use guard_core::entities::{AbuseAlert, AbuseEvent, AbuseEvidence};
use guard_core::Snowflake;
use tracing::{debug, info, instrument, warn};

use crate::context::EngineContext;
use crate::error::EngineResult;

/// Window aggregator service
pub struct WindowAggregator<'a> {
    ctx: &'a EngineContext,
}

impl<'a> WindowAggregator<'a> {
    /// Create a new WindowAggregator
    pub fn new(ctx: &'a EngineContext) -> Self {
        Self { ctx }
    }

    /// One scheduled aggregation pass
    ///
    /// Returns the alerts that were confirmed delivered. A user whose alert
    /// delivery fails keeps their events and is re-flagged on the next run;
    /// one user's failure does not abort the others. No flagged users means
    /// no writes.
    #[instrument(skip(self))]
    pub async fn run_once(&self, now: DateTime<Utc>) -> EngineResult<Vec<AbuseAlert>> {
        let detection = self.ctx.detection();
        let flagged = self
            .flag_users(
                now,
                detection.warning_time_window_seconds,
                detection.warning_max_allowed_removal,
            )
            .await?;

        if flagged.is_empty() {
            debug!("No reaction abusers detected");
            return Ok(Vec::new());
        }

        let mut delivered = Vec::with_capacity(flagged.len());
        for alert in flagged {
            info!(
                user_id = %alert.user_id,
                count = alert.count,
                "User exceeded the reaction removal threshold; sending alert"
            );

            if let Err(e) = self.ctx.notifier().notify(&alert).await {
                // Leave the events in place so the user is re-flagged next run
                warn!(user_id = %alert.user_id, error = %e, "Alert delivery failed; purge skipped");
                continue;
            }

            // Full purge, not just the evidence set: resetting the count to
            // zero suppresses repeat-alert storms for the same burst.
            let deleted = self.ctx.abuse_repo().delete_for_user(alert.user_id).await?;
            debug!(user_id = %alert.user_id, deleted, "Purged abuse events after alert");

            delivered.push(alert);
        }

        Ok(delivered)
    }

    /// Read-only flag computation with explicit parameters
    ///
    /// The on-demand query path for operators: same select, count, and
    /// deduplication pipeline as a scheduled run, but nothing is notified and
    /// nothing is purged.
    #[instrument(skip(self))]
    pub async fn snapshot(
        &self,
        now: DateTime<Utc>,
        window_seconds: f64,
        max_allowed: i64,
    ) -> EngineResult<Vec<AbuseAlert>> {
        self.flag_users(now, window_seconds, max_allowed).await
    }

    async fn flag_users(
        &self,
        now: DateTime<Utc>,
        window_seconds: f64,
        max_allowed: i64,
    ) -> EngineResult<Vec<AbuseAlert>> {
        let cutoff = now - seconds_to_duration(window_seconds);
        let events = self
            .ctx
            .abuse_repo()
            .offending_events(cutoff, max_allowed)
            .await?;

        debug!(rows = events.len(), "Selected in-window events for flagged users");
        Ok(build_alerts(&events, window_seconds as i64))
    }
}

/// Group offender rows into one alert per user
///
/// Rows arrive ordered `user_id ASC, occurred_at DESC`; the count covers all
/// of a user's rows while the evidence keeps only the first-seen entry per
/// `(message, user, channel, server, emoji)` key in that order.
fn build_alerts(events: &[AbuseEvent], window_seconds: i64) -> Vec<AbuseAlert> {
    let mut alerts: Vec<AbuseAlert> = Vec::new();
    let mut seen = HashSet::new();
    let mut current_user: Option<Snowflake> = None;

    for event in events {
        let user_id = event.identity.user_id;
        if current_user != Some(user_id) {
            current_user = Some(user_id);
            alerts.push(AbuseAlert::new(user_id, 0, window_seconds, Vec::new()));
        }

        let alert = alerts
            .last_mut()
            .unwrap_or_else(|| unreachable!("alert pushed above"));
        alert.count += 1;

        if seen.insert(event.evidence_key()) {
            alert.evidence.push(AbuseEvidence::from(event));
        }
    }

    alerts
}

fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::milliseconds((seconds * 1000.0) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use guard_core::entities::ReactionIdentity;
    use guard_core::value_objects::EmojiKey;

    fn event(user_id: i64, message_id: i64, occurred_at: DateTime<Utc>) -> AbuseEvent {
        AbuseEvent::new(
            ReactionIdentity::new(
                Snowflake::new(message_id),
                Snowflake::new(1),
                Snowflake::new(2),
                Snowflake::new(user_id),
                EmojiKey::from_unicode("👍").unwrap(),
            ),
            occurred_at,
        )
    }

    #[test]
    fn test_build_alerts_counts_all_rows_but_dedups_evidence() {
        let now = Utc::now();
        // Four events on the same message by one user
        let events = vec![
            event(100, 7, now),
            event(100, 7, now - Duration::seconds(1)),
            event(100, 7, now - Duration::seconds(2)),
            event(100, 7, now - Duration::seconds(3)),
        ];

        let alerts = build_alerts(&events, 3600);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].count, 4);
        assert_eq!(alerts[0].evidence.len(), 1);
        assert_eq!(alerts[0].evidence[0].message_id, Snowflake::new(7));
    }

    #[test]
    fn test_build_alerts_splits_users_in_order() {
        let now = Utc::now();
        let events = vec![
            event(100, 1, now),
            event(100, 2, now),
            event(200, 3, now),
        ];

        let alerts = build_alerts(&events, 3600);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].user_id, Snowflake::new(100));
        assert_eq!(alerts[0].count, 2);
        assert_eq!(alerts[0].evidence.len(), 2);
        assert_eq!(alerts[1].user_id, Snowflake::new(200));
        assert_eq!(alerts[1].count, 1);
    }

    #[test]
    fn test_build_alerts_evidence_key_covers_emoji() {
        let now = Utc::now();
        let mut with_other_emoji = event(100, 7, now);
        with_other_emoji.identity.emoji_key = EmojiKey::from_unicode("👎").unwrap();

        // Same message, same user, different emoji: two evidence entries
        let alerts = build_alerts(&[event(100, 7, now), with_other_emoji], 3600);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].evidence.len(), 2);
    }

    #[test]
    fn test_build_alerts_empty() {
        assert!(build_alerts(&[], 3600).is_empty());
    }

    #[test]
    fn test_seconds_to_duration_keeps_fractions() {
        assert_eq!(seconds_to_duration(2.5).num_milliseconds(), 2500);
    }
}
