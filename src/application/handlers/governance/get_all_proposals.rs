//! GetAllProposalsHandler - Query handler listing every stored proposal.

use std::sync::Arc;

use crate::application::Ledger;
use crate::domain::foundation::ProposalId;
use crate::domain::governance::{GovernanceError, Proposal};

/// Query to list all proposals.
#[derive(Debug, Clone, Default)]
pub struct GetAllProposalsQuery;

/// Handler for listing proposals in identifier order.
pub struct GetAllProposalsHandler {
    ledger: Arc<Ledger>,
}

impl GetAllProposalsHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    /// Returns proposals `0..next_proposal_id`, ascending.
    ///
    /// # Errors
    ///
    /// `Infrastructure` if an identifier below the counter has no record.
    pub async fn handle(&self, _query: GetAllProposalsQuery) -> Result<Vec<Proposal>, GovernanceError> {
        let tx = self.ledger.begin().await;
        let next = tx.next_proposal_id().await?;

        let mut proposals = Vec::new();
        for raw in 0..next.value() {
            let id = ProposalId::new(raw);
            let proposal = tx.proposal(id).await?.ok_or_else(|| {
                tracing::error!(proposal_id = %id, "Proposal missing below counter");
                GovernanceError::infrastructure(format!("proposal {} missing below counter", id))
            })?;
            proposals.push(proposal);
        }

        Ok(proposals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::governance::test_support::*;
    use crate::ports::{StateKey, StateStore};

    #[tokio::test]
    async fn empty_before_initialize() {
        let (ledger, _store) = empty_ledger();

        let proposals = GetAllProposalsHandler::new(ledger)
            .handle(GetAllProposalsQuery)
            .await
            .unwrap();

        assert!(proposals.is_empty());
    }

    #[tokio::test]
    async fn only_genesis_after_initialize() {
        let (ledger, _store) = initialized_ledger().await;

        let proposals = GetAllProposalsHandler::new(ledger)
            .handle(GetAllProposalsQuery)
            .await
            .unwrap();

        assert_eq!(proposals, vec![Proposal::genesis()]);
    }

    #[tokio::test]
    async fn lists_in_identifier_order() {
        let (ledger, _store) = ledger_with_members(&["alice"]).await;
        for _ in 0..3 {
            create_proposal(&ledger, "alice", 2).await;
        }

        let proposals = GetAllProposalsHandler::new(ledger)
            .handle(GetAllProposalsQuery)
            .await
            .unwrap();

        let ids: Vec<String> = proposals.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3"]);
    }

    #[tokio::test]
    async fn gap_below_counter_is_an_infrastructure_error() {
        let (ledger, store) = initialized_ledger().await;
        store
            .set(StateKey::NextProposalId, serde_json::json!(2))
            .await
            .unwrap();

        let result = GetAllProposalsHandler::new(ledger)
            .handle(GetAllProposalsQuery)
            .await;

        assert!(matches!(result, Err(GovernanceError::Infrastructure(ref m)) if m.contains("1")));
    }
}
