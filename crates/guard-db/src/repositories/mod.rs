//! Repository implementations

mod abuse_event;
mod error;
mod pending_reaction;

pub use abuse_event::PgAbuseEventRepository;
pub use error::map_db_error;
pub use pending_reaction::PgPendingReactionRepository;
