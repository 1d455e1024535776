//! # guard-engine
//!
//! Application layer: correlates reaction add/remove notifications into abuse
//! events, aggregates them per user over a trailing window on a fixed
//! schedule, and sweeps aged events.
//!
//! The host wires a gateway to [`PairMatcher`] (or to [`Engine`], which also
//! owns the two scheduled tasks), provides repository implementations from
//! `guard-db`, and an [`AlertNotifier`](guard_core::AlertNotifier) for the
//! notification sink.

pub mod aggregator;
pub mod context;
pub mod error;
pub mod matcher;
pub mod notifiers;
pub mod runtime;
pub mod scheduler;
pub mod sweeper;

// Re-export commonly used types at crate root
pub use aggregator::WindowAggregator;
pub use context::EngineContext;
pub use error::{EngineError, EngineResult};
pub use matcher::PairMatcher;
pub use notifiers::TracingAlertNotifier;
pub use runtime::Engine;
pub use scheduler::spawn_gated;
pub use sweeper::RetentionSweeper;
