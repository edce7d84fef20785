//! CreateStoryHandler - Command handler for adding a story to a session.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, StoryId};
use crate::domain::story::{Story, StoryError};
use crate::ports::{SessionRegistry, StoryRepository};

use super::ensure_session_exists;

/// Command to create a new story.
#[derive(Debug, Clone)]
pub struct CreateStoryCommand {
    pub session_id: SessionId,
    pub description: String,
}

/// Handler for creating stories.
pub struct CreateStoryHandler {
    sessions: Arc<dyn SessionRegistry>,
    stories: Arc<dyn StoryRepository>,
}

impl CreateStoryHandler {
    pub fn new(sessions: Arc<dyn SessionRegistry>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { sessions, stories }
    }

    pub async fn handle(&self, cmd: CreateStoryCommand) -> Result<Story, StoryError> {
        // 1. Session must exist
        ensure_session_exists(self.sessions.as_ref(), &cmd.session_id).await?;

        // 2. Build the pending story
        let story = Story::new(StoryId::new(), cmd.session_id, cmd.description)?;

        // 3. Persist
        self.stories.save(&story).await?;

        tracing::info!(
            session_id = %story.session_id(),
            story_id = %story.id(),
            "Story created"
        );

        Ok(story)
    }
}
