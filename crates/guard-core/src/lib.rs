//! # guard-core
//!
//! Domain layer containing entities, value objects, repository traits, and gateway events.
//! This crate has zero dependencies on infrastructure (database, platform client, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AbuseAlert, AbuseEvent, AbuseEvidence, PendingReaction, ReactionIdentity};
pub use error::DomainError;
pub use events::{RawEmoji, ReactionEvent};
pub use traits::{AbuseEventRepository, AlertNotifier, PendingReactionRepository, RepoResult};
pub use value_objects::{EmojiKey, EmojiKeyError, Snowflake, SnowflakeParseError};
