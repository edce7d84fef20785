//! Story-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SessionNotFound | 404 |
//! | StoryNotFound | 404 |
//! | Forbidden | 403 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, StoryId};

use super::StoryStatus;

/// Story-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoryError {
    /// The session does not exist.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The story does not exist (or is not part of the session).
    #[error("Story not found: {0}")]
    StoryNotFound(StoryId),

    /// The story's status does not allow the operation.
    #[error("Story in status {status} cannot be deleted")]
    Forbidden { status: StoryStatus },

    /// Validation failed.
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl StoryError {
    pub fn session_not_found(id: SessionId) -> Self {
        StoryError::SessionNotFound(id)
    }

    pub fn story_not_found(id: StoryId) -> Self {
        StoryError::StoryNotFound(id)
    }

    pub fn forbidden(status: StoryStatus) -> Self {
        StoryError::Forbidden { status }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StoryError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        StoryError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            StoryError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            StoryError::StoryNotFound(_) => ErrorCode::StoryNotFound,
            StoryError::Forbidden { .. } => ErrorCode::Forbidden,
            StoryError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            StoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for StoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                StoryError::validation(field, err.message)
            }
            _ => StoryError::infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variants() {
        assert_eq!(
            StoryError::session_not_found(SessionId::new()).code(),
            ErrorCode::SessionNotFound
        );
        assert_eq!(
            StoryError::story_not_found(StoryId::new()).code(),
            ErrorCode::StoryNotFound
        );
        assert_eq!(
            StoryError::forbidden(StoryStatus::Voting).code(),
            ErrorCode::Forbidden
        );
        assert_eq!(
            StoryError::infrastructure("boom").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn forbidden_message_names_status() {
        let err = StoryError::forbidden(StoryStatus::VotingClosed);
        assert_eq!(err.to_string(), "Story in status VOTING_CLOSED cannot be deleted");
    }

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: StoryError = DomainError::validation("description", "cannot be empty").into();
        assert_eq!(
            err,
            StoryError::validation("description", "cannot be empty")
        );
    }

    #[test]
    fn database_domain_error_becomes_infrastructure() {
        let err: StoryError = DomainError::new(ErrorCode::DatabaseError, "down").into();
        assert!(matches!(err, StoryError::Infrastructure(_)));
    }
}
