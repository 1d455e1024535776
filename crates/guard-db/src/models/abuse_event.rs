//! Abuse event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the abuse_events table
#[derive(Debug, Clone, FromRow)]
pub struct AbuseEventModel {
    pub message_id: i64,
    pub server_id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub emoji_key: String,
    pub occurred_at: DateTime<Utc>,
}
