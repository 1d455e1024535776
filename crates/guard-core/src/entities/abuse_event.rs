//! Abuse event entity - a classified fast add/remove cycle

use chrono::{DateTime, Utc};

use super::identity::ReactionIdentity;
use crate::value_objects::{EmojiKey, Snowflake};

/// A correlated add/remove pair whose dwell time was below the abuse threshold
///
/// `occurred_at` is the remove instant. Immutable once recorded; destroyed by
/// the aggregator's post-alert purge or the retention sweeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbuseEvent {
    pub identity: ReactionIdentity,
    pub occurred_at: DateTime<Utc>,
}

impl AbuseEvent {
    /// Create a new AbuseEvent
    pub fn new(identity: ReactionIdentity, occurred_at: DateTime<Utc>) -> Self {
        Self {
            identity,
            occurred_at,
        }
    }

    /// Key used to deduplicate evidence entries within one alert
    ///
    /// Owned so the aggregator can collect keys into a set across events.
    pub fn evidence_key(&self) -> (Snowflake, Snowflake, Snowflake, Snowflake, EmojiKey) {
        (
            self.identity.message_id,
            self.identity.user_id,
            self.identity.channel_id,
            self.identity.server_id,
            self.identity.emoji_key.clone(),
        )
    }
}
