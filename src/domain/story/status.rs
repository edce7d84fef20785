//! StoryStatus enum for tracking the estimation lifecycle of a user story.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lifecycle status of a user story.
///
/// Any status may be replaced by any other; there is no transition table.
/// Only `Pending` stories can be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoryStatus {
    #[default]
    Pending,
    Voting,
    VotingClosed,
    Estimated,
}

impl StoryStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [StoryStatus; 4] = [
        StoryStatus::Pending,
        StoryStatus::Voting,
        StoryStatus::VotingClosed,
        StoryStatus::Estimated,
    ];

    /// Returns true if a story in this status may be deleted.
    pub fn is_deletable(&self) -> bool {
        matches!(self, StoryStatus::Pending)
    }

    /// Canonical wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryStatus::Pending => "PENDING",
            StoryStatus::Voting => "VOTING",
            StoryStatus::VotingClosed => "VOTING_CLOSED",
            StoryStatus::Estimated => "ESTIMATED",
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StoryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown story status '{}'", s))
            })
    }
}
