//! Provided alert notifier implementations
//!
//! Real sinks (the platform's alert channel) live with the host; this module
//! only carries a tracing-backed notifier for embedding and smoke testing.

use async_trait::async_trait;
use guard_core::entities::AbuseAlert;
use guard_core::traits::AlertNotifier;
use guard_core::DomainError;
use tracing::warn;

/// Notifier that emits alerts as structured warning logs
///
/// Delivery always succeeds, so the aggregator's purge runs unconditionally.
#[derive(Debug, Clone, Default)]
pub struct TracingAlertNotifier;

#[async_trait]
impl AlertNotifier for TracingAlertNotifier {
    async fn notify(&self, alert: &AbuseAlert) -> Result<(), DomainError> {
        let evidence = serde_json::to_string(&alert.evidence)
            .map_err(|e| DomainError::AlertDeliveryFailed(e.to_string()))?;

        warn!(
            user_id = %alert.user_id,
            count = alert.count,
            window_seconds = alert.window_seconds,
            evidence = %evidence,
            "Reaction abuser detected"
        );
        Ok(())
    }
}
