//! In-Memory Story Repository Adapter
//!
//! Stores stories in insertion order behind a single lock, which also makes
//! the pending-only delete atomic.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StoryId};
use crate::domain::story::Story;
use crate::ports::{DeleteOutcome, StoryRepository};

/// In-memory story storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoryRepository {
    stories: Arc<RwLock<Vec<Story>>>,
}

impl InMemoryStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored stories across all sessions.
    pub async fn len(&self) -> usize {
        self.stories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stories.read().await.is_empty()
    }
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn save(&self, story: &Story) -> Result<(), DomainError> {
        let mut stories = self.stories.write().await;
        if stories.iter().any(|s| s.id() == story.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Story already exists: {}", story.id()),
            ));
        }
        stories.push(story.clone());
        Ok(())
    }

    async fn update(&self, story: &Story) -> Result<(), DomainError> {
        let mut stories = self.stories.write().await;
        match stories.iter_mut().find(|s| s.id() == story.id()) {
            Some(existing) => {
                *existing = story.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::StoryNotFound,
                format!("Story not found: {}", story.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        let stories = self.stories.read().await;
        Ok(stories.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_by_session_id(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Story>, DomainError> {
        let stories = self.stories.read().await;
        Ok(stories
            .iter()
            .filter(|s| s.belongs_to(session_id))
            .cloned()
            .collect())
    }

    async fn delete_if_pending(&self, id: &StoryId) -> Result<DeleteOutcome, DomainError> {
        let mut stories = self.stories.write().await;
        let Some(position) = stories.iter().position(|s| s.id() == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        let status = stories[position].status();
        if !status.is_deletable() {
            return Ok(DeleteOutcome::NotPending(status));
        }

        stories.remove(position);
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::StoryStatus;

    fn story_in(session_id: SessionId, description: &str) -> Story {
        Story::new(StoryId::new(), session_id, description.to_string()).unwrap()
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = InMemoryStoryRepository::new();
        let story = story_in(SessionId::new(), "Story");
        repo.save(&story).await.unwrap();

        let found = repo.find_by_id(story.id()).await.unwrap();
        assert_eq!(found, Some(story));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = InMemoryStoryRepository::new();
        let story = story_in(SessionId::new(), "Story");
        repo.save(&story).await.unwrap();

        assert!(repo.save(&story).await.is_err());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_by_session_keeps_insertion_order() {
        let repo = InMemoryStoryRepository::new();
        let session_id = SessionId::new();
        let first = story_in(session_id, "First");
        let other = story_in(SessionId::new(), "Other session");
        let second = story_in(session_id, "Second");
        for story in [&first, &other, &second] {
            repo.save(story).await.unwrap();
        }

        let stories = repo.find_by_session_id(&session_id).await.unwrap();
        let descriptions: Vec<&str> = stories.iter().map(|s| s.description()).collect();
        assert_eq!(descriptions, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn update_overwrites_status() {
        let repo = InMemoryStoryRepository::new();
        let mut story = story_in(SessionId::new(), "Story");
        repo.save(&story).await.unwrap();

        story.set_status(StoryStatus::Voting);
        repo.update(&story).await.unwrap();

        let stored = repo.find_by_id(story.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), StoryStatus::Voting);
    }

    #[tokio::test]
    async fn update_of_unknown_story_fails() {
        let repo = InMemoryStoryRepository::new();
        let story = story_in(SessionId::new(), "Never saved");

        let err = repo.update(&story).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoryNotFound);
    }

    #[tokio::test]
    async fn delete_if_pending_removes_pending_story() {
        let repo = InMemoryStoryRepository::new();
        let story = story_in(SessionId::new(), "Story");
        repo.save(&story).await.unwrap();

        assert_eq!(
            repo.delete_if_pending(story.id()).await.unwrap(),
            DeleteOutcome::Deleted
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_if_pending_keeps_non_pending_story() {
        let repo = InMemoryStoryRepository::new();
        let mut story = story_in(SessionId::new(), "Story");
        story.set_status(StoryStatus::Estimated);
        repo.save(&story).await.unwrap();

        assert_eq!(
            repo.delete_if_pending(story.id()).await.unwrap(),
            DeleteOutcome::NotPending(StoryStatus::Estimated)
        );
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn delete_if_pending_reports_missing_story() {
        let repo = InMemoryStoryRepository::new();
        assert_eq!(
            repo.delete_if_pending(&StoryId::new()).await.unwrap(),
            DeleteOutcome::NotFound
        );
    }
}
