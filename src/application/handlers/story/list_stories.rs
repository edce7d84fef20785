//! ListStoriesHandler - Query handler for the stories of a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::story::{Story, StoryError};
use crate::ports::{SessionRegistry, StoryRepository};

use super::ensure_session_exists;

/// Query for all stories in a session.
#[derive(Debug, Clone)]
pub struct ListStoriesQuery {
    pub session_id: SessionId,
}

/// Handler for listing stories.
pub struct ListStoriesHandler {
    sessions: Arc<dyn SessionRegistry>,
    stories: Arc<dyn StoryRepository>,
}

impl ListStoriesHandler {
    pub fn new(sessions: Arc<dyn SessionRegistry>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { sessions, stories }
    }

    /// Returns the session's stories in storage order.
    pub async fn handle(&self, query: ListStoriesQuery) -> Result<Vec<Story>, StoryError> {
        ensure_session_exists(self.sessions.as_ref(), &query.session_id).await?;

        let stories = self.stories.find_by_session_id(&query.session_id).await?;
        tracing::debug!(
            session_id = %query.session_id,
            count = stories.len(),
            "Listed stories"
        );
        Ok(stories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemorySessionRegistry, InMemoryStoryRepository};
    use crate::domain::foundation::StoryId;

    #[tokio::test]
    async fn returns_only_stories_of_the_session() {
        let session_id = SessionId::new();
        let other_session = SessionId::new();
        let sessions = Arc::new(InMemorySessionRegistry::with_sessions([
            session_id,
            other_session,
        ]));
        let stories = Arc::new(InMemoryStoryRepository::new());

        let mine = Story::new(StoryId::new(), session_id, "Mine".to_string()).unwrap();
        let theirs = Story::new(StoryId::new(), other_session, "Theirs".to_string()).unwrap();
        stories.save(&mine).await.unwrap();
        stories.save(&theirs).await.unwrap();

        let handler = ListStoriesHandler::new(sessions, stories);
        let listed = handler.handle(ListStoriesQuery { session_id }).await.unwrap();

        assert_eq!(listed, vec![mine]);
    }

    #[tokio::test]
    async fn empty_session_lists_nothing() {
        let session_id = SessionId::new();
        let handler = ListStoriesHandler::new(
            Arc::new(InMemorySessionRegistry::with_sessions([session_id])),
            Arc::new(InMemoryStoryRepository::new()),
        );

        let listed = handler.handle(ListStoriesQuery { session_id }).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn fails_when_session_missing() {
        let handler = ListStoriesHandler::new(
            Arc::new(InMemorySessionRegistry::new()),
            Arc::new(InMemoryStoryRepository::new()),
        );
        let session_id = SessionId::new();

        let result = handler.handle(ListStoriesQuery { session_id }).await;
        assert_eq!(result, Err(StoryError::SessionNotFound(session_id)));
    }
}
