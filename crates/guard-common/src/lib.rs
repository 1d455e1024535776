//! # guard-common
//!
//! Shared utilities including configuration and telemetry.

pub mod config;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, DetectionConfig, Environment,
    ScheduleConfig,
};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
