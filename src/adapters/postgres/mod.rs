//! PostgreSQL adapters - Database implementations for the story ports.
//!
//! - `PostgresSessionRegistry` - Session existence lookups
//! - `PostgresStoryRepository` - Story persistence with atomic guarded delete
//! - `PostgresVoteReader` - Read-only vote queries

mod session_registry;
mod story_repository;
mod vote_reader;

pub use session_registry::PostgresSessionRegistry;
pub use story_repository::PostgresStoryRepository;
pub use vote_reader::PostgresVoteReader;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens a connection pool sized and timed from configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
