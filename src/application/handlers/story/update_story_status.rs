//! UpdateStoryStatusHandler - Command handler overwriting a story's status.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, SessionId, StoryId};
use crate::domain::story::{StoryError, StoryStatus, StoryStatusReport};
use crate::ports::{SessionRegistry, StoryRepository};

use super::{ensure_session_exists, load_story};

/// Command to set a story's status.
#[derive(Debug, Clone)]
pub struct UpdateStoryStatusCommand {
    pub session_id: SessionId,
    pub story_id: StoryId,
    pub status: StoryStatus,
}

/// Handler for status updates.
///
/// Any status may replace any other. The returned report never carries
/// votes: the vote store is not consulted on update.
pub struct UpdateStoryStatusHandler {
    sessions: Arc<dyn SessionRegistry>,
    stories: Arc<dyn StoryRepository>,
}

impl UpdateStoryStatusHandler {
    pub fn new(sessions: Arc<dyn SessionRegistry>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { sessions, stories }
    }

    pub async fn handle(
        &self,
        cmd: UpdateStoryStatusCommand,
    ) -> Result<StoryStatusReport, StoryError> {
        ensure_session_exists(self.sessions.as_ref(), &cmd.session_id).await?;

        let mut story = load_story(self.stories.as_ref(), &cmd.story_id).await?;

        let previous = story.set_status(cmd.status);
        self.stories.update(&story).await.map_err(|err| {
            // A concurrent delete can remove the story between load and update.
            if err.code == ErrorCode::StoryNotFound {
                StoryError::story_not_found(cmd.story_id)
            } else {
                StoryError::from(err)
            }
        })?;

        tracing::info!(
            story_id = %cmd.story_id,
            from = %previous,
            to = %cmd.status,
            "Story status updated"
        );

        Ok(StoryStatusReport::without_votes(story.status()))
    }
}
