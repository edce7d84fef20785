//! Status plus vote aggregate reported for a story.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::VoterId;

use super::StoryStatus;

/// A story's status together with the votes cast against it.
///
/// `voters` is `None` whenever `vote_count` is zero; otherwise it holds one
/// entry per vote in the order the vote store produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryStatusReport {
    pub status: StoryStatus,
    pub vote_count: u32,
    pub voters: Option<Vec<VoterId>>,
}

impl StoryStatusReport {
    /// Aggregates the voters recorded for a story.
    ///
    /// Duplicates are kept; uniqueness belongs to the vote store.
    pub fn from_votes(status: StoryStatus, voters: Vec<VoterId>) -> Self {
        if voters.is_empty() {
            return Self::without_votes(status);
        }
        Self {
            status,
            vote_count: saturating_count(voters.len()),
            voters: Some(voters),
        }
    }

    /// A report carrying only the status.
    pub fn without_votes(status: StoryStatus) -> Self {
        Self {
            status,
            vote_count: 0,
            voters: None,
        }
    }
}

fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn voters(names: &[&str]) -> Vec<VoterId> {
        names.iter().map(|n| VoterId::new(*n).unwrap()).collect()
    }

    #[test]
    fn vote_count_saturates_instead_of_wrapping() {
        assert_eq!(saturating_count(3), 3);
        assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
        if let Some(past_max) = (u32::MAX as usize).checked_add(1) {
            assert_eq!(saturating_count(past_max), u32::MAX);
        }
    }

    #[test]
    fn no_votes_yields_empty_report() {
        let report = StoryStatusReport::from_votes(StoryStatus::Voting, vec![]);
        assert_eq!(report, StoryStatusReport::without_votes(StoryStatus::Voting));
        assert!(report.voters.is_none());
    }

    #[test]
    fn votes_are_counted_in_store_order() {
        let report =
            StoryStatusReport::from_votes(StoryStatus::Pending, voters(&["alice", "bob"]));
        assert_eq!(report.vote_count, 2);
        assert_eq!(report.voters, Some(voters(&["alice", "bob"])));
    }

    #[test]
    fn duplicate_voters_are_not_collapsed() {
        let report =
            StoryStatusReport::from_votes(StoryStatus::Pending, voters(&["alice", "alice"]));
        assert_eq!(report.vote_count, 2);
    }

    fn any_status() -> impl Strategy<Value = StoryStatus> {
        prop::sample::select(StoryStatus::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn count_matches_voter_list(
            status in any_status(),
            names in prop::collection::vec("[a-z]{1,8}", 0..20),
        ) {
            let voters: Vec<VoterId> = names.iter().map(|n| VoterId::new(n.clone()).unwrap()).collect();
            let report = StoryStatusReport::from_votes(status, voters.clone());

            prop_assert_eq!(report.status, status);
            prop_assert_eq!(report.vote_count as usize, voters.len());
            match report.voters {
                None => prop_assert!(voters.is_empty()),
                Some(list) => prop_assert_eq!(list, voters),
            }
        }
    }
}
