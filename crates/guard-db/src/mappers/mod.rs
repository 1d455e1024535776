//! Entity to model mappers
//!
//! This module provides conversions between domain entities (guard-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod abuse_event;
mod pending_reaction;

pub use abuse_event::AbuseEventInsert;
pub use pending_reaction::PendingReactionInsert;
