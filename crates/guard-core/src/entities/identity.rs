//! Reaction identity - the composite key identifying a single reaction act

use crate::value_objects::{EmojiKey, Snowflake};

/// Composite key identifying a specific reaction act
///
/// Two notifications refer to the same reaction act iff all five fields
/// match. `server_id` is zero for reactions outside any server context.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReactionIdentity {
    pub message_id: Snowflake,
    pub server_id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji_key: EmojiKey,
}

impl ReactionIdentity {
    /// Create a new ReactionIdentity
    pub fn new(
        message_id: Snowflake,
        server_id: Snowflake,
        channel_id: Snowflake,
        user_id: Snowflake,
        emoji_key: EmojiKey,
    ) -> Self {
        Self {
            message_id,
            server_id,
            channel_id,
            user_id,
            emoji_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: i64, emoji: &str) -> ReactionIdentity {
        ReactionIdentity::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(user_id),
            EmojiKey::from_unicode(emoji).unwrap(),
        )
    }

    #[test]
    fn test_equality_covers_all_fields() {
        assert_eq!(identity(100, "👍"), identity(100, "👍"));
        assert_ne!(identity(100, "👍"), identity(101, "👍"));
        assert_ne!(identity(100, "👍"), identity(100, "👎"));
    }
}
