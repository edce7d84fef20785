//! Story repository port.
//!
//! Defines the contract for persisting and retrieving Story aggregates.
//!
//! # Design
//!
//! - **Narrow capability set**: lookup by id, save, update, list by session,
//!   conditional delete
//! - **Atomic delete guard**: the pending-status check and the removal happen
//!   in one operation so a concurrent status update cannot slip between them

use crate::domain::foundation::{DomainError, SessionId, StoryId};
use crate::domain::story::{Story, StoryStatus};
use async_trait::async_trait;

/// Result of [`StoryRepository::delete_if_pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The story was pending and has been removed.
    Deleted,
    /// The story exists but is not pending; nothing was removed.
    NotPending(StoryStatus),
    /// No story with that id exists.
    NotFound,
}

/// Repository port for Story aggregate persistence.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Save a new story.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, story: &Story) -> Result<(), DomainError>;

    /// Overwrite an existing story. Last writer wins.
    ///
    /// # Errors
    ///
    /// - `StoryNotFound` if the story doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, story: &Story) -> Result<(), DomainError>;

    /// Find a story by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError>;

    /// Find all stories in a session, in storage order.
    async fn find_by_session_id(&self, session_id: &SessionId)
        -> Result<Vec<Story>, DomainError>;

    /// Delete a story only if it is currently pending.
    ///
    /// The status check and the removal must be atomic with respect to
    /// concurrent `update` calls on the same story.
    async fn delete_if_pending(&self, id: &StoryId) -> Result<DeleteOutcome, DomainError>;
}
