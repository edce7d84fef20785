//! PostgreSQL implementation of StoryRepository.
//!
//! Persists Story aggregates to the `user_stories` table.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StoryId, Timestamp};
use crate::domain::story::{Story, StoryStatus};
use crate::ports::{DeleteOutcome, StoryRepository};

/// PostgreSQL implementation of StoryRepository.
#[derive(Clone)]
pub struct PostgresStoryRepository {
    pool: PgPool,
}

impl PostgresStoryRepository {
    /// Creates a new PostgresStoryRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn save(&self, story: &Story) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_stories (
                id, session_id, description, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(story.id().as_uuid())
        .bind(story.session_id().as_uuid())
        .bind(story.description())
        .bind(story.status().as_str())
        .bind(story.created_at().as_datetime())
        .bind(story.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert story", e))?;

        Ok(())
    }

    async fn update(&self, story: &Story) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE user_stories SET
                status = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(story.id().as_uuid())
        .bind(story.status().as_str())
        .bind(story.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update story", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::StoryNotFound,
                format!("Story not found: {}", story.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, session_id, description, status, created_at, updated_at
            FROM user_stories
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch story", e))?;

        row.map(row_to_story).transpose()
    }

    async fn find_by_session_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Story>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, description, status, created_at, updated_at
            FROM user_stories
            WHERE session_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch stories by session", e))?;

        rows.into_iter().map(row_to_story).collect()
    }

    async fn delete_if_pending(&self, id: &StoryId) -> Result<DeleteOutcome, DomainError> {
        // Lock the row, delete it only when pending, and report what was seen,
        // all in one statement.
        let row = sqlx::query(
            r#"
            WITH target AS (
                SELECT id, status FROM user_stories WHERE id = $1 FOR UPDATE
            ),
            removed AS (
                DELETE FROM user_stories s
                USING target t
                WHERE s.id = t.id AND t.status = $2
                RETURNING s.id
            )
            SELECT t.status, EXISTS (SELECT 1 FROM removed) AS deleted
            FROM target t
            "#,
        )
        .bind(id.as_uuid())
        .bind(StoryStatus::Pending.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to delete story", e))?;

        let Some(row) = row else {
            return Ok(DeleteOutcome::NotFound);
        };

        let deleted: bool = row
            .try_get("deleted")
            .map_err(|e| DomainError::database("Failed to get deleted", e))?;
        if deleted {
            return Ok(DeleteOutcome::Deleted);
        }

        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::database("Failed to get status", e))?;
        Ok(DeleteOutcome::NotPending(parse_status(&status)?))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn parse_status(s: &str) -> Result<StoryStatus, DomainError> {
    s.parse::<StoryStatus>().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid story status: {}", s),
        )
    })
}

fn row_to_story(row: sqlx::postgres::PgRow) -> Result<Story, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;

    let session_id: uuid::Uuid = row
        .try_get("session_id")
        .map_err(|e| DomainError::database("Failed to get session_id", e))?;

    let description: String = row
        .try_get("description")
        .map_err(|e| DomainError::database("Failed to get description", e))?;

    let status: String = row
        .try_get("status")
        .map_err(|e| DomainError::database("Failed to get status", e))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| DomainError::database("Failed to get updated_at", e))?;

    Ok(Story::reconstitute(
        StoryId::from_uuid(id),
        SessionId::from_uuid(session_id),
        description,
        parse_status(&status)?,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_conversion_roundtrips() {
        for status in StoryStatus::ALL {
            assert_eq!(parse_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn parse_status_rejects_invalid() {
        let err = parse_status("archived").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
