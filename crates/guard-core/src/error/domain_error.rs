//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::EmojiKeyError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A store read or write failed; recoverable per operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// The gateway delivered an emoji representation we cannot canonicalize
    #[error("Unparseable emoji: {0}")]
    UnparseableEmoji(#[from] EmojiKeyError),

    /// The notification sink rejected or failed to deliver an alert
    #[error("Alert delivery failed: {0}")]
    AlertDeliveryFailed(String),
}
