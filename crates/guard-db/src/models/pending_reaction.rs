//! Pending reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the pending_reactions table
#[derive(Debug, Clone, FromRow)]
pub struct PendingReactionModel {
    pub message_id: i64,
    pub server_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub emoji_key: String,
    pub added_at: DateTime<Utc>,
}
