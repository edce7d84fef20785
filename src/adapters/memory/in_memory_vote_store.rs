//! In-Memory Vote Store Adapter
//!
//! Records one vote per (story, voter) pair, in arrival order.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, StoryId, VoterId};
use crate::ports::VoteReader;

/// In-memory vote storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoteStore {
    votes: Arc<RwLock<Vec<(StoryId, VoterId)>>>,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote. A repeated (story, voter) pair is ignored and returns false.
    pub async fn record(&self, story_id: StoryId, voter_id: VoterId) -> bool {
        let mut votes = self.votes.write().await;
        if votes
            .iter()
            .any(|(story, voter)| *story == story_id && *voter == voter_id)
        {
            return false;
        }
        votes.push((story_id, voter_id));
        true
    }
}

#[async_trait]
impl VoteReader for InMemoryVoteStore {
    async fn find_voters_for_story(
        &self,
        story_id: &StoryId,
    ) -> Result<Vec<VoterId>, DomainError> {
        let votes = self.votes.read().await;
        Ok(votes
            .iter()
            .filter(|(story, _)| story == story_id)
            .map(|(_, voter)| voter.clone())
            .collect())
    }
}
