//! Domain entities

mod abuse_event;
mod alert;
mod identity;
mod pending_reaction;

pub use abuse_event::AbuseEvent;
pub use alert::{AbuseAlert, AbuseEvidence};
pub use identity::ReactionIdentity;
pub use pending_reaction::PendingReaction;
