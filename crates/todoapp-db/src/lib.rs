//! # Todoapp DB
//!
//! Database pool, schema migrations and the user repository for the
//! todoapp API, built on SQLx with PostgreSQL.
//!
//! - [`users`]: the [`UserStore`] trait and its PostgreSQL implementation
//! - `memory`: an in-process [`MemoryUserStore`] (feature `test-utils`)
//!
//! # Example
//!
//! ```ignore
//! use todoapp_config::DatabaseConfig;
//! use todoapp_db::{PgUserStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserStore::new(pool);
//! ```

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use todoapp_config::DatabaseConfig;
use tracing::info;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod users;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryUserStore;
pub use users::{NewUser, PgUserStore, UserRecord, UserStore, UserStoreError};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Connects a PostgreSQL pool sized from `config`.
///
/// Call once at startup; the pool is cheap to clone.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Applies the migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}
