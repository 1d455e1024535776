//! PostgreSQL implementation of PendingReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guard_core::entities::{PendingReaction, ReactionIdentity};
use guard_core::traits::{PendingReactionRepository, RepoResult};

use crate::mappers::PendingReactionInsert;
use crate::models::PendingReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PendingReactionRepository
#[derive(Clone)]
pub struct PgPendingReactionRepository {
    pool: PgPool,
}

impl PgPendingReactionRepository {
    /// Create a new PgPendingReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PendingReactionRepository for PgPendingReactionRepository {
    #[instrument(skip(self, pending))]
    async fn insert(&self, pending: &PendingReaction) -> RepoResult<()> {
        let row = PendingReactionInsert::new(pending);

        sqlx::query(
            r#"
            INSERT INTO pending_reactions (message_id, server_id, channel_id, user_id, emoji_key, added_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(row.message_id)
        .bind(row.server_id)
        .bind(row.channel_id)
        .bind(row.user_id)
        .bind(row.emoji_key)
        .bind(pending.added_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, identity))]
    async fn claim_latest(&self, identity: &ReactionIdentity) -> RepoResult<Option<PendingReaction>> {
        // Single-statement select-and-delete: the inner SELECT picks the newest
        // match (surrogate id breaks added_at ties), FOR UPDATE SKIP LOCKED
        // keeps two concurrent removes from consuming the same row.
        let result = sqlx::query_as::<_, PendingReactionModel>(
            r#"
            DELETE FROM pending_reactions
            WHERE id = (
                SELECT id
                FROM pending_reactions
                WHERE message_id = $1 AND server_id = $2 AND channel_id = $3
                  AND user_id = $4 AND emoji_key = $5
                ORDER BY added_at DESC, id DESC
                LIMIT 1
                FOR UPDATE SKIP LOCKED
            )
            RETURNING message_id, server_id, channel_id, user_id, emoji_key, added_at
            "#,
        )
        .bind(identity.message_id.into_inner())
        .bind(identity.server_id.into_inner())
        .bind(identity.channel_id.into_inner())
        .bind(identity.user_id.into_inner())
        .bind(identity.emoji_key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PendingReaction::from))
    }
}
