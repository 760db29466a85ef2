//! Persistence layer for the categories service.
//!
//! Owns the connection pool, the embedded migrations and the
//! `categories` repository.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Bounds applied to the connection pool.
///
/// The defaults keep a handful of warm connections and recycle everything
/// within the hour so the server never holds more than `max_connections`
/// sessions open against PostgreSQL.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections (default: `20`).
    pub max_connections: u32,
    /// Connections kept open while idle (default: `5`).
    pub min_connections: u32,
    /// Idle connections older than this are closed (default: 10 minutes).
    pub idle_timeout: Duration,
    /// Any connection older than this is closed (default: 60 minutes).
    pub max_lifetime: Duration,
    /// How long a request waits for a free connection (default: 5 seconds).
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            min_connections: 5,
            idle_timeout: Duration::from_secs(10 * 60),
            max_lifetime: Duration::from_secs(60 * 60),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Creating database pool"
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
