//! Abuse event entity <-> model mapper

use guard_core::entities::{AbuseEvent, ReactionIdentity};
use guard_core::value_objects::{EmojiKey, Snowflake};

use crate::models::AbuseEventModel;

/// Convert AbuseEventModel to AbuseEvent entity
impl From<AbuseEventModel> for AbuseEvent {
    fn from(model: AbuseEventModel) -> Self {
        AbuseEvent {
            identity: ReactionIdentity {
                message_id: Snowflake::new(model.message_id),
                server_id: Snowflake::new(model.server_id),
                channel_id: Snowflake::new(model.channel_id),
                user_id: Snowflake::new(model.user_id),
                emoji_key: EmojiKey::from_stored(model.emoji_key),
            },
            occurred_at: model.occurred_at,
        }
    }
}

/// Convert AbuseEvent entity reference to values for database insertion
pub struct AbuseEventInsert<'a> {
    pub message_id: i64,
    pub server_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub emoji_key: &'a str,
}

impl<'a> AbuseEventInsert<'a> {
    pub fn new(event: &'a AbuseEvent) -> Self {
        Self {
            message_id: event.identity.message_id.into_inner(),
            server_id: event.identity.server_id.into_inner(),
            channel_id: event.identity.channel_id.into_inner(),
            user_id: event.identity.user_id.into_inner(),
            emoji_key: event.identity.emoji_key.as_str(),
        }
    }
}
