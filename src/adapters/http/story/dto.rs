//! HTTP DTOs for story endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::VoterId;
use crate::domain::story::{Story, StoryStatus, StoryStatusReport};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add a story to a session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoryRequest {
    pub description: String,
}

/// Request to overwrite a story's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStoryStatusRequest {
    pub status: StoryStatus,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A story as returned by create and list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryResponse {
    pub id: String,
    pub description: String,
    pub status: StoryStatus,
}

impl From<&Story> for StoryResponse {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id().to_string(),
            description: story.description().to_string(),
            status: story.status(),
        }
    }
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self::from(&story)
    }
}

/// Status and vote aggregate of a story.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryStatusResponse {
    pub status: StoryStatus,
    pub vote_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_voted: Option<Vec<String>>,
}

impl From<StoryStatusReport> for StoryStatusResponse {
    fn from(report: StoryStatusReport) -> Self {
        Self {
            status: report.status,
            vote_count: report.vote_count,
            users_voted: report
                .voters
                .map(|voters| voters.iter().map(VoterId::to_string).collect()),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::with_code("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_code("FORBIDDEN", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn with_code(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }
}
