//! Ports - repository and notifier traits implemented by the infrastructure layer

mod notifier;
mod repositories;

pub use notifier::AlertNotifier;
pub use repositories::{AbuseEventRepository, PendingReactionRepository, RepoResult};
