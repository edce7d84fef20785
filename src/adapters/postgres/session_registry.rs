//! PostgreSQL implementation of SessionRegistry.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionRegistry;

/// Looks sessions up in the `sessions` table.
#[derive(Clone)]
pub struct PostgresSessionRegistry {
    pool: PgPool,
}

impl PostgresSessionRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRegistry for PostgresSessionRegistry {
    async fn exists(&self, id: &SessionId) -> Result<bool, DomainError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM sessions WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to check session existence", e))?;

        Ok(result.0)
    }
}
