//! PostgreSQL implementation of AbuseEventRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::AbuseEvent;
use guard_core::traits::{AbuseEventRepository, RepoResult};
use guard_core::value_objects::Snowflake;

use crate::mappers::AbuseEventInsert;
use crate::models::AbuseEventModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AbuseEventRepository
#[derive(Clone)]
pub struct PgAbuseEventRepository {
    pool: PgPool,
}

impl PgAbuseEventRepository {
    /// Create a new PgAbuseEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AbuseEventRepository for PgAbuseEventRepository {
    #[instrument(skip(self, event))]
    async fn append(&self, event: &AbuseEvent) -> RepoResult<()> {
        let row = AbuseEventInsert::new(event);

        sqlx::query(
            r#"
            INSERT INTO abuse_events (message_id, server_id, channel_id, user_id, emoji_key, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(row.message_id)
        .bind(row.server_id)
        .bind(row.channel_id)
        .bind(row.user_id)
        .bind(row.emoji_key)
        .bind(event.occurred_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn offending_events(
        &self,
        cutoff: DateTime<Utc>,
        max_allowed: i64,
    ) -> RepoResult<Vec<AbuseEvent>> {
        // Window lower edge is inclusive (occurred_at >= cutoff); threshold is
        // a strict > so a count exactly at the limit is tolerated.
        let results = sqlx::query_as::<_, AbuseEventModel>(
            r#"
            SELECT message_id, server_id, channel_id, user_id, emoji_key, occurred_at
            FROM abuse_events
            WHERE occurred_at >= $1
              AND user_id IN (
                  SELECT user_id
                  FROM abuse_events
                  WHERE occurred_at >= $1
                  GROUP BY user_id
                  HAVING COUNT(*) > $2
              )
            ORDER BY user_id ASC, occurred_at DESC, id DESC
            "#,
        )
        .bind(cutoff)
        .bind(max_allowed)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AbuseEvent::from).collect())
    }

    #[instrument(skip(self))]
    async fn recent_for_user(
        &self,
        user_id: Snowflake,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<AbuseEvent>> {
        let results = sqlx::query_as::<_, AbuseEventModel>(
            r#"
            SELECT message_id, server_id, channel_id, user_id, emoji_key, occurred_at
            FROM abuse_events
            WHERE user_id = $1 AND occurred_at >= $2
            ORDER BY occurred_at DESC, id DESC
            "#,
        )
        .bind(user_id.into_inner())
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AbuseEvent::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_for_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM abuse_events WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        // Strict <: a row aged exactly at the horizon survives this sweep.
        let result = sqlx::query(
            r#"
            DELETE FROM abuse_events WHERE occurred_at < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAbuseEventRepository>();
    }
}
