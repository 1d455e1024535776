//! Alert notifier trait (port) - the notification-sink collaborator

use async_trait::async_trait;

use crate::entities::AbuseAlert;
use crate::error::DomainError;

/// Delivers abuse alerts to whatever sink the host wires in
///
/// Delivery must be confirmed before the aggregator purges a flagged user's
/// events; a `Err` return leaves the evidence in place so the user is
/// re-flagged on the next run.
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    /// Deliver one alert; `Ok` means the sink accepted it
    async fn notify(&self, alert: &AbuseAlert) -> Result<(), DomainError>;
}
