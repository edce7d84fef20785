//! DeleteStoryHandler - Command handler removing a pending story.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, StoryId};
use crate::domain::story::StoryError;
use crate::ports::{DeleteOutcome, SessionRegistry, StoryRepository};

use super::ensure_session_exists;

/// Command to delete a story.
#[derive(Debug, Clone)]
pub struct DeleteStoryCommand {
    pub session_id: SessionId,
    pub story_id: StoryId,
}

/// Handler for story deletion.
///
/// Only pending stories can be removed. The status check is delegated to the
/// repository's conditional delete so it cannot race a status update.
pub struct DeleteStoryHandler {
    sessions: Arc<dyn SessionRegistry>,
    stories: Arc<dyn StoryRepository>,
}

impl DeleteStoryHandler {
    pub fn new(sessions: Arc<dyn SessionRegistry>, stories: Arc<dyn StoryRepository>) -> Self {
        Self { sessions, stories }
    }

    pub async fn handle(&self, cmd: DeleteStoryCommand) -> Result<(), StoryError> {
        ensure_session_exists(self.sessions.as_ref(), &cmd.session_id).await?;

        match self.stories.delete_if_pending(&cmd.story_id).await? {
            DeleteOutcome::Deleted => {
                tracing::info!(
                    session_id = %cmd.session_id,
                    story_id = %cmd.story_id,
                    "Story deleted"
                );
                Ok(())
            }
            DeleteOutcome::NotPending(status) => {
                tracing::warn!(
                    story_id = %cmd.story_id,
                    status = %status,
                    "Rejected delete of non-pending story"
                );
                Err(StoryError::forbidden(status))
            }
            DeleteOutcome::NotFound => Err(StoryError::story_not_found(cmd.story_id)),
        }
    }
}
