//! VoteOnProposalHandler - Command handler for casting a vote.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::Ledger;
use crate::domain::foundation::{MemberId, ProposalId};
use crate::domain::governance::{Ballot, GovernanceError, MemberAction, Proposal};

/// Command to vote on a proposal.
#[derive(Debug, Clone)]
pub struct VoteOnProposalCommand {
    pub voter: MemberId,
    /// Decimal string identifier, as callers see it.
    pub proposal_id: String,
    /// `true` votes yes, `false` votes no.
    pub vote: bool,
}

/// Result of a successful vote: the proposal after the vote.
pub type VoteOnProposalResult = Proposal;

/// Handler for voting.
///
/// Checks run in order: membership, proposal existence, double vote.
/// Resolved proposals are not closed to further votes.
pub struct VoteOnProposalHandler {
    ledger: Arc<Ledger>,
}

impl VoteOnProposalHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        cmd: VoteOnProposalCommand,
    ) -> Result<VoteOnProposalResult, GovernanceError> {
        let mut tx = self.ledger.begin().await;

        if !tx.is_member(&cmd.voter).await? {
            warn!(voter = %cmd.voter, "Vote rejected: not a member");
            return Err(GovernanceError::not_a_member(cmd.voter, MemberAction::Vote));
        }

        let stored = match cmd.proposal_id.parse::<ProposalId>() {
            Ok(id) => tx.proposal(id).await?,
            Err(_) => None,
        };
        let mut proposal = stored.ok_or_else(|| {
            warn!(proposal_id = %cmd.proposal_id, "Vote rejected: proposal not found");
            GovernanceError::proposal_not_found(&cmd.proposal_id)
        })?;

        let ballot = Ballot::from(cmd.vote);
        let voter = cmd.voter.clone();
        let resolved = proposal.cast_vote(cmd.voter, ballot).map_err(|e| {
            warn!(voter = %voter, proposal_id = %proposal.id, "Vote rejected: already voted");
            e
        })?;

        tx.put_proposal(&proposal)?;
        tx.commit().await?;

        debug!(
            voter = %voter,
            proposal_id = %proposal.id,
            ?ballot,
            yes = proposal.yes_count(),
            no = proposal.no_count(),
            "Vote recorded"
        );
        if let Some(status) = resolved {
            info!(proposal_id = %proposal.id, %status, "Proposal resolved");
        }

        Ok(proposal)
    }
}
