//! Vote reader port (read side of the vote store).
//!
//! Votes are written by the voting flow, never by the story module.
//! Reads are point-in-time snapshots and may trail concurrent voting.

use crate::domain::foundation::{DomainError, StoryId, VoterId};
use async_trait::async_trait;

/// Read access to the votes recorded against stories.
#[async_trait]
pub trait VoteReader: Send + Sync {
    /// Voters who voted on the story, in the store's iteration order.
    ///
    /// An unknown story yields an empty list.
    async fn find_voters_for_story(&self, story_id: &StoryId)
        -> Result<Vec<VoterId>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn VoteReader) {}
    }
}
