//! Engine context - dependency container for the correlation components
//!
//! Holds the two repositories, the alert notifier, and the detection
//! configuration. Constructed once at startup; the configuration is plain
//! data passed by reference, never a mutable global.

use std::sync::Arc;

use guard_common::DetectionConfig;
use guard_core::traits::{AbuseEventRepository, AlertNotifier, PendingReactionRepository};
use guard_core::Snowflake;

/// Engine context containing all dependencies
#[derive(Clone)]
pub struct EngineContext {
    detection: DetectionConfig,
    self_user_id: Snowflake,
    pending_repo: Arc<dyn PendingReactionRepository>,
    abuse_repo: Arc<dyn AbuseEventRepository>,
    notifier: Arc<dyn AlertNotifier>,
}

impl EngineContext {
    /// Create a new engine context with all dependencies
    pub fn new(
        detection: DetectionConfig,
        self_user_id: Snowflake,
        pending_repo: Arc<dyn PendingReactionRepository>,
        abuse_repo: Arc<dyn AbuseEventRepository>,
        notifier: Arc<dyn AlertNotifier>,
    ) -> Self {
        Self {
            detection,
            self_user_id,
            pending_repo,
            abuse_repo,
            notifier,
        }
    }

    /// Get the detection thresholds
    pub fn detection(&self) -> &DetectionConfig {
        &self.detection
    }

    /// The account this process runs as; its own reactions are ignored
    pub fn self_user_id(&self) -> Snowflake {
        self.self_user_id
    }

    /// Get the pending reaction repository
    pub fn pending_repo(&self) -> &dyn PendingReactionRepository {
        self.pending_repo.as_ref()
    }

    /// Get the abuse event repository
    pub fn abuse_repo(&self) -> &dyn AbuseEventRepository {
        self.abuse_repo.as_ref()
    }

    /// Get the alert notifier
    pub fn notifier(&self) -> &dyn AlertNotifier {
        self.notifier.as_ref()
    }
}
