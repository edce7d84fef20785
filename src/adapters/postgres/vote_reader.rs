//! PostgreSQL implementation of VoteReader.
//!
//! Reads the `votes` table written by the voting flow.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, StoryId, VoterId};
use crate::ports::VoteReader;

#[derive(Clone)]
pub struct PostgresVoteReader {
    pool: PgPool,
}

impl PostgresVoteReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteReader for PostgresVoteReader {
    async fn find_voters_for_story(
        &self,
        story_id: &StoryId,
    ) -> Result<Vec<VoterId>, DomainError> {
        let voter_ids: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT voter_id
            FROM votes
            WHERE user_story_id = $1
            ORDER BY cast_at ASC, voter_id ASC
            "#,
        )
        .bind(story_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch votes", e))?;

        voter_ids
            .into_iter()
            .map(|id| {
                VoterId::new(id).map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Invalid voter_id: {}", e))
                })
            })
            .collect()
    }
}
