//! Persistence for the tradepost listing wizard.
//!
//! State lives in a key-value store behind [`KeyValueStore`]: one record for
//! the in-progress draft and one for the listing collection. The
//! repositories read and write those records; [`flow::ListingFlow`] drives
//! the wizard transitions on top of them.

pub mod error;
pub mod flow;
pub mod kv;
pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;

pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Held to a single connection that never expires, since every new SQLite
/// in-memory connection would see an empty database.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
