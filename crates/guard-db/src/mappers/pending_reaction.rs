//! Pending reaction entity <-> model mapper

use guard_core::entities::{PendingReaction, ReactionIdentity};
use guard_core::value_objects::{EmojiKey, Snowflake};

use crate::models::PendingReactionModel;

/// Convert PendingReactionModel to PendingReaction entity
impl From<PendingReactionModel> for PendingReaction {
    fn from(model: PendingReactionModel) -> Self {
        PendingReaction {
            identity: ReactionIdentity {
                message_id: Snowflake::new(model.message_id),
                server_id: Snowflake::new(model.server_id),
                channel_id: Snowflake::new(model.channel_id),
                user_id: Snowflake::new(model.user_id),
                emoji_key: EmojiKey::from_stored(model.emoji_key),
            },
            added_at: model.added_at,
        }
    }
}

/// Convert PendingReaction entity reference to values for database insertion
pub struct PendingReactionInsert<'a> {
    pub message_id: i64,
    pub server_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub emoji_key: &'a str,
}

impl<'a> PendingReactionInsert<'a> {
    pub fn new(pending: &'a PendingReaction) -> Self {
        Self {
            message_id: pending.identity.message_id.into_inner(),
            server_id: pending.identity.server_id.into_inner(),
            channel_id: pending.identity.channel_id.into_inner(),
            user_id: pending.identity.user_id.into_inner(),
            emoji_key: pending.identity.emoji_key.as_str(),
        }
    }
}
