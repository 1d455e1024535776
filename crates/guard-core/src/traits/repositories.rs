//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{AbuseEvent, PendingReaction, ReactionIdentity};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pending Reaction Repository
// ============================================================================

#[async_trait]
pub trait PendingReactionRepository: Send + Sync {
    /// Record an add awaiting its matching remove
    async fn insert(&self, pending: &PendingReaction) -> RepoResult<()>;

    /// Atomically take the most recently added pending reaction for an identity
    ///
    /// Selects the newest match (LIFO tie-break) and deletes exactly that row
    /// in one atomic step; two removes racing on the same identity consume at
    /// most one row each. Returns `None` when nothing matches.
    async fn claim_latest(&self, identity: &ReactionIdentity) -> RepoResult<Option<PendingReaction>>;
}

// ============================================================================
// Abuse Event Repository
// ============================================================================

#[async_trait]
pub trait AbuseEventRepository: Send + Sync {
    /// Append a classified abuse event
    async fn append(&self, event: &AbuseEvent) -> RepoResult<()>;

    /// Events at or after `cutoff` for users whose in-window count strictly
    /// exceeds `max_allowed`
    ///
    /// Rows come back ordered `user_id ASC, occurred_at DESC` (insertion order
    /// as the final tie-break) so callers can group and deduplicate in one pass.
    async fn offending_events(
        &self,
        cutoff: DateTime<Utc>,
        max_allowed: i64,
    ) -> RepoResult<Vec<AbuseEvent>>;

    /// Events for one user at or after `cutoff`, newest first
    async fn recent_for_user(
        &self,
        user_id: Snowflake,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<AbuseEvent>>;

    /// Delete every event for a user, returning the number removed
    async fn delete_for_user(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Delete events strictly older than `cutoff`, returning the number removed
    async fn prune_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}
