//! Pending reaction entity - an open add awaiting its matching remove

use chrono::{DateTime, Utc};

use super::identity::ReactionIdentity;

/// An add event awaiting a matching remove
///
/// Several pending reactions may share one identity (a user can add and
/// remove the same emoji repeatedly); the store disambiguates by insertion
/// order. Deleted whole on match, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReaction {
    pub identity: ReactionIdentity,
    pub added_at: DateTime<Utc>,
}

impl PendingReaction {
    /// Create a new PendingReaction
    pub fn new(identity: ReactionIdentity, added_at: DateTime<Utc>) -> Self {
        Self { identity, added_at }
    }

    /// Elapsed time between this add and a remove instant
    pub fn dwell_seconds(&self, removed_at: DateTime<Utc>) -> f64 {
        let micros = removed_at
            .signed_duration_since(self.added_at)
            .num_microseconds()
            .unwrap_or(i64::MAX);
        micros as f64 / 1_000_000.0
    }
}
