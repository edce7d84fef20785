//! GetStoryStatusHandler - Query handler for a story's status and votes.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, StoryId};
use crate::domain::story::{StoryError, StoryStatusReport};
use crate::ports::{SessionRegistry, StoryRepository, VoteReader};

use super::{ensure_session_exists, load_story};

/// Query for the status of a story.
#[derive(Debug, Clone)]
pub struct GetStoryStatusQuery {
    pub session_id: SessionId,
    pub story_id: StoryId,
}

/// Handler reporting status plus vote aggregate.
///
/// The story read and the vote read are separate snapshots; votes arriving
/// in between are simply reflected or not.
pub struct GetStoryStatusHandler {
    sessions: Arc<dyn SessionRegistry>,
    stories: Arc<dyn StoryRepository>,
    votes: Arc<dyn VoteReader>,
}

impl GetStoryStatusHandler {
    pub fn new(
        sessions: Arc<dyn SessionRegistry>,
        stories: Arc<dyn StoryRepository>,
        votes: Arc<dyn VoteReader>,
    ) -> Self {
        Self {
            sessions,
            stories,
            votes,
        }
    }

    pub async fn handle(&self, query: GetStoryStatusQuery) -> Result<StoryStatusReport, StoryError> {
        ensure_session_exists(self.sessions.as_ref(), &query.session_id).await?;

        let story = load_story(self.stories.as_ref(), &query.story_id).await?;

        let voters = self.votes.find_voters_for_story(story.id()).await?;
        let report = StoryStatusReport::from_votes(story.status(), voters);

        tracing::debug!(
            story_id = %query.story_id,
            status = %report.status,
            vote_count = report.vote_count,
            "Story status read"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemorySessionRegistry, InMemoryStoryRepository, InMemoryVoteStore,
    };
    use crate::domain::foundation::{DomainError, ErrorCode, VoterId};
    use crate::domain::story::{Story, StoryStatus};
    use async_trait::async_trait;

    struct Fixture {
        handler: GetStoryStatusHandler,
        stories: Arc<InMemoryStoryRepository>,
        votes: Arc<InMemoryVoteStore>,
        session_id: SessionId,
    }

    fn fixture() -> Fixture {
        let session_id = SessionId::new();
        let stories = Arc::new(InMemoryStoryRepository::new());
        let votes = Arc::new(InMemoryVoteStore::new());
        let handler = GetStoryStatusHandler::new(
            Arc::new(InMemorySessionRegistry::with_sessions([session_id])),
            stories.clone(),
            votes.clone(),
        );
        Fixture {
            handler,
            stories,
            votes,
            session_id,
        }
    }

    async fn saved_story(fixture: &Fixture, status: StoryStatus) -> Story {
        let mut story =
            Story::new(StoryId::new(), fixture.session_id, "Implement login".to_string())
                .unwrap();
        story.set_status(status);
        fixture.stories.save(&story).await.unwrap();
        story
    }

    fn voter(name: &str) -> VoterId {
        VoterId::new(name).unwrap()
    }

    #[tokio::test]
    async fn zero_votes_reports_no_voter_list_for_every_status() {
        let fixture = fixture();
        for status in StoryStatus::ALL {
            let story = saved_story(&fixture, status).await;
            let report = fixture
                .handler
                .handle(GetStoryStatusQuery {
                    session_id: fixture.session_id,
                    story_id: *story.id(),
                })
                .await
                .unwrap();

            assert_eq!(report, StoryStatusReport::without_votes(status));
        }
    }

    #[tokio::test]
    async fn reports_count_and_voters() {
        let fixture = fixture();
        let story = saved_story(&fixture, StoryStatus::Pending).await;
        fixture.votes.record(*story.id(), voter("alice")).await;
        fixture.votes.record(*story.id(), voter("bob")).await;

        let report = fixture
            .handler
            .handle(GetStoryStatusQuery {
                session_id: fixture.session_id,
                story_id: *story.id(),
            })
            .await
            .unwrap();

        assert_eq!(report.status, StoryStatus::Pending);
        assert_eq!(report.vote_count, 2);
        assert_eq!(report.voters, Some(vec![voter("alice"), voter("bob")]));
    }

    #[tokio::test]
    async fn fails_when_story_missing() {
        let fixture = fixture();
        let story_id = StoryId::new();

        let result = fixture
            .handler
            .handle(GetStoryStatusQuery {
                session_id: fixture.session_id,
                story_id,
            })
            .await;

        assert_eq!(result, Err(StoryError::StoryNotFound(story_id)));
    }

    #[tokio::test]
    async fn story_is_resolved_by_id_through_any_existing_session() {
        let fixture = fixture();
        let foreign =
            Story::new(StoryId::new(), SessionId::new(), "Elsewhere".to_string()).unwrap();
        fixture.stories.save(&foreign).await.unwrap();
        fixture
            .votes
            .record(*foreign.id(), VoterId::new("alice").unwrap())
            .await;

        let report = fixture
            .handler
            .handle(GetStoryStatusQuery {
                session_id: fixture.session_id,
                story_id: *foreign.id(),
            })
            .await
            .unwrap();

        assert_eq!(report.status, StoryStatus::Pending);
        assert_eq!(report.vote_count, 1);
        assert_eq!(report.voters, Some(vec![VoterId::new("alice").unwrap()]));
    }

    #[tokio::test]
    async fn fails_when_session_missing() {
        let fixture = fixture();
        let story = saved_story(&fixture, StoryStatus::Pending).await;
        let missing = SessionId::new();

        let result = fixture
            .handler
            .handle(GetStoryStatusQuery {
                session_id: missing,
                story_id: *story.id(),
            })
            .await;

        assert_eq!(result, Err(StoryError::SessionNotFound(missing)));
    }

    struct UnavailableVoteReader;

    #[async_trait]
    impl VoteReader for UnavailableVoteReader {
        async fn find_voters_for_story(
            &self,
            _story_id: &StoryId,
        ) -> Result<Vec<VoterId>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "votes offline"))
        }
    }

    #[tokio::test]
    async fn propagates_vote_store_failure() {
        let session_id = SessionId::new();
        let stories = Arc::new(InMemoryStoryRepository::new());
        let story = Story::new(StoryId::new(), session_id, "Story".to_string()).unwrap();
        stories.save(&story).await.unwrap();

        let handler = GetStoryStatusHandler::new(
            Arc::new(InMemorySessionRegistry::with_sessions([session_id])),
            stories,
            Arc::new(UnavailableVoteReader),
        );

        let result = handler
            .handle(GetStoryStatusQuery {
                session_id,
                story_id: *story.id(),
            })
            .await;

        assert!(matches!(result, Err(StoryError::Infrastructure(_))));
    }
}
