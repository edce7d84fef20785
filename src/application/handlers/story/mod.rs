//! Story command and query handlers.
//!
//! Together these make up the story lifecycle: create, list, read status
//! with vote aggregation, overwrite status, and pending-only delete.

mod create_story;
mod delete_story;
mod get_story_status;
mod list_stories;
mod update_story_status;

pub use create_story::{CreateStoryCommand, CreateStoryHandler};
pub use delete_story::{DeleteStoryCommand, DeleteStoryHandler};
pub use get_story_status::{GetStoryStatusHandler, GetStoryStatusQuery};
pub use list_stories::{ListStoriesHandler, ListStoriesQuery};
pub use update_story_status::{UpdateStoryStatusCommand, UpdateStoryStatusHandler};

use crate::domain::foundation::{SessionId, StoryId};
use crate::domain::story::{Story, StoryError};
use crate::ports::{SessionRegistry, StoryRepository};

async fn ensure_session_exists(
    sessions: &dyn SessionRegistry,
    session_id: &SessionId,
) -> Result<(), StoryError> {
    if sessions.exists(session_id).await? {
        Ok(())
    } else {
        Err(StoryError::session_not_found(*session_id))
    }
}

/// Loads a story by id alone; the session only has to exist.
async fn load_story(
    stories: &dyn StoryRepository,
    story_id: &StoryId,
) -> Result<Story, StoryError> {
    stories
        .find_by_id(story_id)
        .await?
        .ok_or_else(|| StoryError::story_not_found(*story_id))
}
