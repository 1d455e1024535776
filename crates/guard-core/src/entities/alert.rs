//! Abuse alert - the payload handed to the notification sink

use serde::Serialize;

use super::abuse_event::AbuseEvent;
use crate::value_objects::{EmojiKey, Snowflake};

/// One deduplicated abuse incident attached to an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbuseEvidence {
    pub message_id: Snowflake,
    pub channel_id: Snowflake,
    pub server_id: Snowflake,
    pub emoji_key: EmojiKey,
}

impl From<&AbuseEvent> for AbuseEvidence {
    fn from(event: &AbuseEvent) -> Self {
        Self {
            message_id: event.identity.message_id,
            channel_id: event.identity.channel_id,
            server_id: event.identity.server_id,
            emoji_key: event.identity.emoji_key.clone(),
        }
    }
}

/// Alert emitted when a user crosses the abuse threshold within the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbuseAlert {
    pub user_id: Snowflake,
    /// In-window event count, including events beyond the deduplicated evidence
    pub count: i64,
    pub window_seconds: i64,
    pub evidence: Vec<AbuseEvidence>,
}

impl AbuseAlert {
    /// Create a new AbuseAlert
    pub fn new(
        user_id: Snowflake,
        count: i64,
        window_seconds: i64,
        evidence: Vec<AbuseEvidence>,
    ) -> Self {
        Self {
            user_id,
            count,
            window_seconds,
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReactionIdentity;
    use chrono::Utc;

    #[test]
    fn test_evidence_from_event() {
        let event = AbuseEvent::new(
            ReactionIdentity::new(
                Snowflake::new(1),
                Snowflake::new(2),
                Snowflake::new(3),
                Snowflake::new(100),
                EmojiKey::from_unicode("👍").unwrap(),
            ),
            Utc::now(),
        );

        let evidence = AbuseEvidence::from(&event);
        assert_eq!(evidence.message_id, Snowflake::new(1));
        assert_eq!(evidence.channel_id, Snowflake::new(3));
        assert_eq!(evidence.server_id, Snowflake::new(2));
        assert_eq!(evidence.emoji_key.as_str(), "1f44d");
    }
}
