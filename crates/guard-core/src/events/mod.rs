//! Gateway events - raw notifications delivered by the platform gateway

mod reaction_event;

pub use reaction_event::{RawEmoji, ReactionEvent};
