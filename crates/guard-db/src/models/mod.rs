//! Database models with SQLx `FromRow` derives

mod abuse_event;
mod pending_reaction;

pub use abuse_event::AbuseEventModel;
pub use pending_reaction::PendingReactionModel;
