//! Engine error type

use guard_core::DomainError;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Application layer errors
///
/// Every variant is recoverable: an ingestion failure is isolated to its
/// event, a scheduled-tick failure aborts that tick only.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Domain rule or store failure
    #[error(transparent)]
    Domain(#[from] DomainError),
}
