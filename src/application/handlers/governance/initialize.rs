//! InitializeHandler - Command handler for the one-time ledger setup.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::Ledger;
use crate::domain::governance::{GovernanceError, Proposal};

/// Command to run the one-time setup.
#[derive(Debug, Clone, Default)]
pub struct InitializeCommand;

/// Handler that seeds the genesis proposal and resets the counters.
///
/// Fails with `AlreadyInitialized` on every call after the first success.
pub struct InitializeHandler {
    ledger: Arc<Ledger>,
}

impl InitializeHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, _cmd: InitializeCommand) -> Result<(), GovernanceError> {
        let mut tx = self.ledger.begin().await;

        if tx.is_initialized().await? {
            warn!("Initialize rejected: ledger already initialized");
            return Err(GovernanceError::already_initialized());
        }

        let genesis = Proposal::genesis();
        tx.put_proposal(&genesis)?;
        tx.set_next_proposal_id(genesis.id.next())?;
        tx.set_member_count(0)?;
        tx.mark_initialized()?;
        tx.commit().await?;

        info!(genesis_id = %genesis.id, "Ledger initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::governance::test_support::*;
    use crate::domain::foundation::ProposalId;
    use crate::domain::governance::ProposalStatus;

    #[tokio::test]
    async fn seeds_genesis_proposal() {
        let (ledger, _store) = empty_ledger();
        let handler = InitializeHandler::new(ledger.clone());

        handler.handle(InitializeCommand).await.unwrap();

        let tx = ledger.begin().await;
        let genesis = tx.proposal(ProposalId::GENESIS).await.unwrap().unwrap();
        assert_eq!(genesis.title, "Proposal #1");
        assert_eq!(genesis.status, ProposalStatus::InProgress);
        assert_eq!(genesis.vote_threshold, 1);
        assert!(tx.is_initialized().await.unwrap());
        assert_eq!(tx.next_proposal_id().await.unwrap(), ProposalId::new(1));
        assert_eq!(tx.member_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn second_call_fails_without_changing_state() {
        let (ledger, store) = empty_ledger();
        let handler = InitializeHandler::new(ledger.clone());
        handler.handle(InitializeCommand).await.unwrap();
        let entries_after_first = store.entry_count().await;

        let result = handler.handle(InitializeCommand).await;

        assert_eq!(result, Err(GovernanceError::AlreadyInitialized));
        assert_eq!(store.entry_count().await, entries_after_first);
        let tx = ledger.begin().await;
        assert_eq!(tx.next_proposal_id().await.unwrap(), ProposalId::new(1));
    }

    #[tokio::test]
    async fn resets_counters_and_genesis_written_before_setup() {
        let (ledger, _store) = empty_ledger();
        {
            let mut tx = ledger.begin().await;
            tx.admit_member(&member("early")).unwrap();
            tx.set_member_count(1).unwrap();
            tx.put_proposal(&Proposal::new(ProposalId::GENESIS, "pre-init", "", 7))
                .unwrap();
            tx.set_next_proposal_id(ProposalId::new(1)).unwrap();
            tx.commit().await.unwrap();
        }

        InitializeHandler::new(ledger.clone())
            .handle(InitializeCommand)
            .await
            .unwrap();

        let tx = ledger.begin().await;
        assert_eq!(tx.member_count().await.unwrap(), 0);
        assert!(tx.is_member(&member("early")).await.unwrap());
        let genesis = tx.proposal(ProposalId::GENESIS).await.unwrap().unwrap();
        assert_eq!(genesis.title, "Proposal #1");
    }

    #[tokio::test]
    async fn failed_commit_leaves_ledger_uninitialized() {
        let (ledger, store) = empty_ledger();
        store.fail_next_commit();

        let result = InitializeHandler::new(ledger.clone())
            .handle(InitializeCommand)
            .await;

        assert!(matches!(result, Err(GovernanceError::Infrastructure(_))));
        assert!(!ledger.begin().await.is_initialized().await.unwrap());
        assert_eq!(store.entry_count().await, 0);
    }
}
