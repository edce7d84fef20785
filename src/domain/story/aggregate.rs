//! Story aggregate entity.
//!
//! A story is a unit of work estimated inside one planning-poker session.
//! The description and owning session are fixed at creation; only the
//! status changes afterwards.

use crate::domain::foundation::{DomainError, SessionId, StoryId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::StoryStatus;

/// Maximum length for a story description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Story aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `description` is non-empty and at most 2000 characters
/// - `session_id` and `description` never change after creation
/// - new stories start as `Pending`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    id: StoryId,
    session_id: SessionId,
    description: String,
    status: StoryStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Story {
    /// Create a new pending story in the given session.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if description is blank or too long
    pub fn new(
        id: StoryId,
        session_id: SessionId,
        description: String,
    ) -> Result<Self, DomainError> {
        Self::validate_description(&description)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            session_id,
            description,
            status: StoryStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a story from persistence (no validation).
    pub fn reconstitute(
        id: StoryId,
        session_id: SessionId,
        description: String,
        status: StoryStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            session_id,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &StoryId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> StoryStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if the story is owned by the given session.
    pub fn belongs_to(&self, session_id: &SessionId) -> bool {
        &self.session_id == session_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Overwrite the status, returning the previous one.
    ///
    /// Every status is reachable from every other status.
    pub fn set_status(&mut self, status: StoryStatus) -> StoryStatus {
        let previous = std::mem::replace(&mut self.status, status);
        self.updated_at = Timestamp::now();
        previous
    }

    fn validate_description(description: &str) -> Result<(), ValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        let length = trimmed.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::too_long(
                "description",
                MAX_DESCRIPTION_LENGTH,
                length,
            ));
        }
        Ok(())
    }
}
