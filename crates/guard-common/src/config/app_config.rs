//! Application configuration structs
//!
//! Loads configuration from environment variables. The config is constructed
//! once at startup and passed by reference into each component's constructor;
//! nothing here is globally mutable.

use guard_core::Snowflake;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub detection: DetectionConfig,
    pub schedule: ScheduleConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
    /// The platform account this process runs as; its own reactions are ignored
    pub self_user_id: Snowflake,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Abuse-detection thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Maximum dwell (seconds) classified as an abusive add/remove cycle
    #[serde(default = "default_reacted_time_window")]
    pub reacted_time_window_seconds: f64,
    /// Trailing window (seconds) over which abuse events are counted per user
    #[serde(default = "default_warning_time_window")]
    pub warning_time_window_seconds: f64,
    /// Counts strictly below this are tolerated
    #[serde(default = "default_max_allowed_removal")]
    pub warning_max_allowed_removal: i64,
    /// Retention horizon = warning window times this multiplier
    #[serde(default = "default_retention_multiplier")]
    pub retention_multiplier: u32,
}

impl DetectionConfig {
    /// Age (seconds) beyond which abuse events are unconditionally deleted
    #[must_use]
    pub fn retention_horizon_seconds(&self) -> f64 {
        self.warning_time_window_seconds * f64::from(self.retention_multiplier)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            reacted_time_window_seconds: default_reacted_time_window(),
            warning_time_window_seconds: default_warning_time_window(),
            warning_max_allowed_removal: default_max_allowed_removal(),
            retention_multiplier: default_retention_multiplier(),
        }
    }
}

/// Periods for the two scheduled tasks
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_aggregation_interval")]
    pub aggregation_interval_seconds: u64,
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            aggregation_interval_seconds: default_aggregation_interval(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "reaction-guard".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_reacted_time_window() -> f64 {
    2.5
}

fn default_warning_time_window() -> f64 {
    3600.0
}

fn default_max_allowed_removal() -> i64 {
    3
}

fn default_retention_multiplier() -> u32 {
    2
}

fn default_aggregation_interval() -> u64 {
    60
}

fn default_sweep_interval() -> u64 {
    3600
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
                self_user_id: env::var("SELF_USER_ID")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SELF_USER_ID"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            detection: DetectionConfig {
                reacted_time_window_seconds: env::var("REACTED_TIME_WINDOW_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_reacted_time_window),
                warning_time_window_seconds: env::var("WARNING_TIME_WINDOW_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_warning_time_window),
                warning_max_allowed_removal: env::var("WARNING_MAX_ALLOWED_REMOVAL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_allowed_removal),
                retention_multiplier: env::var("RETENTION_MULTIPLIER")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_retention_multiplier),
            },
            schedule: ScheduleConfig {
                aggregation_interval_seconds: env::var("AGGREGATION_INTERVAL_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_aggregation_interval),
                sweep_interval_seconds: env::var("SWEEP_INTERVAL_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_sweep_interval),
            },
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
