//! # raid-db
//!
//! PostgreSQL implementations of the raid-core ports: group and trainer card
//! repositories plus the durable job scheduler (store and polling runner).

pub mod models;
pub mod pool;
pub mod repositories;
pub mod scheduler;

pub use pool::{create_pool, create_pool_from_env, DatabaseConfig};
pub use repositories::{PgGroupRepository, PgTrainerCardRepository};
pub use scheduler::{JobRunner, PgJobScheduler};

// Re-export the pool type used across the workspace
pub use sqlx::PgPool;
