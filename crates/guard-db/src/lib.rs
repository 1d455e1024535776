//! # guard-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `guard-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - Idempotent schema bootstrap
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guard_db::pool::{create_pool, DatabaseConfig};
//! use guard_db::PgPendingReactionRepository;
//! use guard_core::traits::PendingReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     guard_db::schema::init_schema(&pool).await?;
//!     let pending_repo = PgPendingReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgAbuseEventRepository, PgPendingReactionRepository};
pub use schema::init_schema;
