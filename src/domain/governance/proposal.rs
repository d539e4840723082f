//! Proposal aggregate.
//!
//! Holds the tallies for one governance item and decides its resolution.
//! Membership is checked by the caller; the aggregate only guards against
//! double voting.

use serde::{Deserialize, Serialize};

use super::{GovernanceError, ProposalStatus};
use crate::domain::foundation::{MemberId, ProposalId, StateMachine};

/// Title of the proposal seeded at initialization.
pub const GENESIS_TITLE: &str = "Proposal #1";

/// Description of the proposal seeded at initialization.
pub const GENESIS_DESCRIPTION: &str = "This is the first proposal of the DAO";

/// Threshold of the proposal seeded at initialization.
pub const GENESIS_VOTE_THRESHOLD: i32 = 1;

/// A yes or no vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ballot {
    Yes,
    No,
}

impl From<bool> for Ballot {
    fn from(vote: bool) -> Self {
        if vote {
            Ballot::Yes
        } else {
            Ballot::No
        }
    }
}

/// A governance item with its yes/no tallies.
///
/// Voter lists keep insertion order. A voter appears in at most one list,
/// at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub title: String,
    pub description: String,
    pub status: ProposalStatus,
    /// Votes on one side needed to resolve. Not validated: zero or negative
    /// values resolve on the first vote.
    pub vote_threshold: i32,
    #[serde(default)]
    pub yes_votes: Vec<MemberId>,
    #[serde(default)]
    pub no_votes: Vec<MemberId>,
}

impl Proposal {
    /// Creates an open proposal with empty tallies.
    pub fn new(
        id: ProposalId,
        title: impl Into<String>,
        description: impl Into<String>,
        vote_threshold: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: ProposalStatus::InProgress,
            vote_threshold,
            yes_votes: Vec::new(),
            no_votes: Vec::new(),
        }
    }

    /// The proposal stored under `"0"` by Initialize.
    pub fn genesis() -> Self {
        Self::new(
            ProposalId::GENESIS,
            GENESIS_TITLE,
            GENESIS_DESCRIPTION,
            GENESIS_VOTE_THRESHOLD,
        )
    }

    pub fn yes_count(&self) -> usize {
        self.yes_votes.len()
    }

    pub fn no_count(&self) -> usize {
        self.no_votes.len()
    }

    /// Returns true if the member appears in either tally.
    pub fn has_voted(&self, member: &MemberId) -> bool {
        self.yes_votes.contains(member) || self.no_votes.contains(member)
    }

    /// Records a vote and re-evaluates the thresholds.
    ///
    /// Resolved proposals still accept votes; their status stays put.
    /// Returns the new status when this vote resolved the proposal.
    ///
    /// # Errors
    ///
    /// - `AlreadyVoted` if the voter is in either tally
    pub fn cast_vote(
        &mut self,
        voter: MemberId,
        ballot: Ballot,
    ) -> Result<Option<ProposalStatus>, GovernanceError> {
        if self.has_voted(&voter) {
            return Err(GovernanceError::already_voted(voter, self.id.to_string()));
        }

        match ballot {
            Ballot::Yes => self.yes_votes.push(voter),
            Ballot::No => self.no_votes.push(voter),
        }

        Ok(self.evaluate_threshold())
    }

    /// Applies the yes check, then the no check, on every call.
    fn evaluate_threshold(&mut self) -> Option<ProposalStatus> {
        let outcome = if reaches(self.yes_count(), self.vote_threshold) {
            Some(ProposalStatus::Passed)
        } else if reaches(self.no_count(), self.vote_threshold) {
            Some(ProposalStatus::Denied)
        } else {
            None
        };

        let next = self.status.transition_to(outcome?).ok()?;
        self.status = next;
        Some(next)
    }
}

fn reaches(count: usize, threshold: i32) -> bool {
    count as i64 >= i64::from(threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> MemberId {
        MemberId::new(id).unwrap()
    }

    fn proposal_with_threshold(threshold: i32) -> Proposal {
        Proposal::new(ProposalId::new(1), "mock_proposal", "mock_proposal_desc", threshold)
    }

    #[test]
    fn genesis_has_fixed_content() {
        let p = Proposal::genesis();
        assert_eq!(p.id, ProposalId::GENESIS);
        assert_eq!(p.title, "Proposal #1");
        assert_eq!(p.description, "This is the first proposal of the DAO");
        assert_eq!(p.status, ProposalStatus::InProgress);
        assert_eq!(p.vote_threshold, 1);
        assert!(p.yes_votes.is_empty());
        assert!(p.no_votes.is_empty());
    }

    #[test]
    fn ballot_from_bool() {
        assert_eq!(Ballot::from(true), Ballot::Yes);
        assert_eq!(Ballot::from(false), Ballot::No);
    }

    #[test]
    fn first_yes_vote_passes_threshold_one() {
        let mut p = proposal_with_threshold(1);
        let resolved = p.cast_vote(member("alice"), Ballot::Yes).unwrap();
        assert_eq!(resolved, Some(ProposalStatus::Passed));
        assert_eq!(p.status, ProposalStatus::Passed);
        assert_eq!(p.yes_votes, vec![member("alice")]);
    }

    #[test]
    fn first_no_vote_denies_threshold_one() {
        let mut p = proposal_with_threshold(1);
        p.cast_vote(member("bob"), Ballot::No).unwrap();
        assert_eq!(p.status, ProposalStatus::Denied);
        assert_eq!(p.no_votes, vec![member("bob")]);
    }

    #[test]
    fn stays_in_progress_below_threshold() {
        let mut p = proposal_with_threshold(3);
        assert_eq!(p.cast_vote(member("a"), Ballot::Yes).unwrap(), None);
        assert_eq!(p.cast_vote(member("b"), Ballot::No).unwrap(), None);
        assert_eq!(p.cast_vote(member("c"), Ballot::Yes).unwrap(), None);
        assert_eq!(p.status, ProposalStatus::InProgress);
        assert_eq!(p.yes_count(), 2);
        assert_eq!(p.no_count(), 1);
    }

    #[test]
    fn resolves_when_tally_reaches_threshold() {
        let mut p = proposal_with_threshold(2);
        p.cast_vote(member("a"), Ballot::No).unwrap();
        let resolved = p.cast_vote(member("b"), Ballot::No).unwrap();
        assert_eq!(resolved, Some(ProposalStatus::Denied));
    }

    #[test]
    fn rejects_second_vote_on_same_side() {
        let mut p = proposal_with_threshold(5);
        p.cast_vote(member("alice"), Ballot::Yes).unwrap();
        let err = p.cast_vote(member("alice"), Ballot::Yes).unwrap_err();
        assert!(matches!(err, GovernanceError::AlreadyVoted { .. }));
        assert_eq!(p.yes_count(), 1);
    }

    #[test]
    fn rejects_vote_switching_sides() {
        let mut p = proposal_with_threshold(5);
        p.cast_vote(member("alice"), Ballot::No).unwrap();
        let err = p.cast_vote(member("alice"), Ballot::Yes).unwrap_err();
        assert!(matches!(err, GovernanceError::AlreadyVoted { .. }));
        assert_eq!(p.yes_count(), 0);
        assert_eq!(p.no_count(), 1);
    }

    #[test]
    fn resolved_proposal_accepts_votes_without_status_change() {
        let mut p = proposal_with_threshold(1);
        p.cast_vote(member("a"), Ballot::No).unwrap();
        assert_eq!(p.status, ProposalStatus::Denied);

        let resolved = p.cast_vote(member("b"), Ballot::Yes).unwrap();
        assert_eq!(resolved, None);
        assert_eq!(p.status, ProposalStatus::Denied);
        assert_eq!(p.yes_votes, vec![member("b")]);
    }

    #[test]
    fn zero_threshold_passes_on_first_vote_of_either_kind() {
        let mut p = proposal_with_threshold(0);
        p.cast_vote(member("a"), Ballot::No).unwrap();
        assert_eq!(p.status, ProposalStatus::Passed);
    }

    #[test]
    fn negative_threshold_is_accepted() {
        let mut p = proposal_with_threshold(-4);
        assert_eq!(p.status, ProposalStatus::InProgress);
        p.cast_vote(member("a"), Ballot::Yes).unwrap();
        assert_eq!(p.status, ProposalStatus::Passed);
    }

    #[test]
    fn very_large_threshold_never_resolves() {
        let mut p = proposal_with_threshold(i32::MAX);
        p.cast_vote(member("a"), Ballot::Yes).unwrap();
        assert_eq!(p.status, ProposalStatus::InProgress);
    }

    #[test]
    fn serializes_with_string_id_and_status() {
        let json = serde_json::to_value(Proposal::genesis()).unwrap();
        assert_eq!(json["id"], "0");
        assert_eq!(json["status"], "IN PROGRESS");
        assert_eq!(json["vote_threshold"], 1);
    }
}
