//! GetProposalHandler - Query handler for a single proposal.

use std::sync::Arc;

use crate::application::Ledger;
use crate::domain::foundation::ProposalId;
use crate::domain::governance::{GovernanceError, Proposal};

/// Query to get a proposal by its decimal string identifier.
#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub proposal_id: String,
}

/// Handler for retrieving one proposal.
///
/// An identifier that does not parse is treated like an unknown one.
pub struct GetProposalHandler {
    ledger: Arc<Ledger>,
}

impl GetProposalHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, query: GetProposalQuery) -> Result<Option<Proposal>, GovernanceError> {
        let Ok(id) = query.proposal_id.parse::<ProposalId>() else {
            return Ok(None);
        };
        self.ledger.begin().await.proposal(id).await
    }
}
