//! Idempotent schema bootstrap
//!
//! Indexes mirror the engine's access paths: exact-match identity lookup with
//! a LIFO tie-break (pending reactions), time-range plus per-user grouping,
//! delete-by-user, and delete-by-age (abuse events).

use sqlx::PgPool;
use tracing::instrument;

use guard_core::error::DomainError;

use crate::repositories::map_db_error;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS pending_reactions (
        id BIGSERIAL PRIMARY KEY,
        message_id BIGINT NOT NULL,
        server_id BIGINT NOT NULL,
        channel_id BIGINT NOT NULL,
        user_id BIGINT NOT NULL,
        emoji_key TEXT NOT NULL,
        added_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_pending_reactions_lookup
    ON pending_reactions (message_id, server_id, channel_id, user_id, emoji_key, added_at DESC)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS abuse_events (
        id BIGSERIAL PRIMARY KEY,
        message_id BIGINT NOT NULL,
        server_id BIGINT NOT NULL,
        channel_id BIGINT NOT NULL,
        user_id BIGINT NOT NULL,
        emoji_key TEXT NOT NULL,
        occurred_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_abuse_events_occurred_at
    ON abuse_events (occurred_at)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_abuse_events_user_occurred_at
    ON abuse_events (user_id, occurred_at DESC)
    "#,
];

/// Create tables and indexes if they do not exist
///
/// Safe to run on every startup.
#[instrument(skip(pool))]
pub async fn init_schema(pool: &PgPool) -> Result<(), DomainError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(map_db_error)?;
    }

    Ok(())
}
