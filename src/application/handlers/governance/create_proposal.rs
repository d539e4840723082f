//! CreateProposalHandler - Command handler for raising a proposal.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::Ledger;
use crate::domain::foundation::MemberId;
use crate::domain::governance::{GovernanceError, MemberAction, Proposal};

/// Command to create a proposal.
#[derive(Debug, Clone)]
pub struct CreateProposalCommand {
    pub creator: MemberId,
    pub title: String,
    pub description: String,
    /// Taken as given; zero and negative values are stored unchanged.
    pub vote_threshold: i32,
}

/// Result of successful proposal creation.
pub type CreateProposalResult = Proposal;

/// Handler for creating proposals.
///
/// Only members may create proposals. The new proposal takes the next
/// sequential identifier; the creator is checked but not recorded.
pub struct CreateProposalHandler {
    ledger: Arc<Ledger>,
}

impl CreateProposalHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(
        &self,
        cmd: CreateProposalCommand,
    ) -> Result<CreateProposalResult, GovernanceError> {
        let mut tx = self.ledger.begin().await;

        if !tx.is_member(&cmd.creator).await? {
            warn!(creator = %cmd.creator, "Create proposal rejected: not a member");
            return Err(GovernanceError::not_a_member(
                cmd.creator,
                MemberAction::CreateProposal,
            ));
        }

        let id = tx.next_proposal_id().await?;
        let proposal = Proposal::new(id, cmd.title, cmd.description, cmd.vote_threshold);

        tx.put_proposal(&proposal)?;
        tx.set_next_proposal_id(id.next())?;
        tx.commit().await?;

        info!(
            proposal_id = %proposal.id,
            vote_threshold = proposal.vote_threshold,
            "Proposal created"
        );
        Ok(proposal)
    }
}
