//! Raw reaction add/remove notification as delivered by the gateway

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::ReactionIdentity;
use crate::value_objects::{EmojiKey, EmojiKeyError, Snowflake};

/// Emoji as it arrives on the wire, before canonicalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEmoji {
    /// Platform-custom emoji: a named symbol with its own snowflake
    Custom { name: String, id: Snowflake },
    /// Plain unicode emoji
    Unicode(String),
}

impl RawEmoji {
    /// Canonicalize into a restart-stable [`EmojiKey`]
    pub fn canonicalize(&self) -> Result<EmojiKey, EmojiKeyError> {
        match self {
            Self::Unicode(s) => EmojiKey::from_unicode(s),
            Self::Custom { name, id } => EmojiKey::from_custom(name, id.into_inner()),
        }
    }
}

/// A single reaction add or remove notification
///
/// `server_id` is zero when the reaction happened outside any server context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub message_id: Snowflake,
    #[serde(default)]
    pub server_id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji: RawEmoji,
    pub occurred_at: DateTime<Utc>,
}

impl ReactionEvent {
    /// Canonicalize the emoji and build the matching key for this event
    pub fn identity(&self) -> Result<ReactionIdentity, EmojiKeyError> {
        Ok(ReactionIdentity::new(
            self.message_id,
            self.server_id,
            self.channel_id,
            self.user_id,
            self.emoji.canonicalize()?,
        ))
    }
}
