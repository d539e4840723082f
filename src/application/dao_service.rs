//! DaoService - one entry point for every governance operation.
//!
//! Wires all handlers over a single shared [`Ledger`], so every call is
//! serialized against the same store.

use std::sync::Arc;

use super::handlers::governance::{
    CreateProposalCommand, CreateProposalHandler, GetAllProposalsHandler, GetAllProposalsQuery,
    GetMemberCountHandler, GetMemberCountQuery, GetMemberExistHandler, GetMemberExistQuery,
    GetProposalHandler, GetProposalQuery, InitializeCommand, InitializeHandler, JoinDaoCommand,
    JoinDaoHandler, VoteOnProposalCommand, VoteOnProposalHandler,
};
use super::Ledger;
use crate::adapters::open_state_store;
use crate::config::StorageConfig;
use crate::domain::foundation::MemberId;
use crate::domain::governance::{GovernanceError, Proposal};
use crate::ports::StateStore;

pub struct DaoService {
    initialize: InitializeHandler,
    join_dao: JoinDaoHandler,
    create_proposal: CreateProposalHandler,
    vote_on_proposal: VoteOnProposalHandler,
    get_all_proposals: GetAllProposalsHandler,
    get_proposal: GetProposalHandler,
    get_member_count: GetMemberCountHandler,
    get_member_exist: GetMemberExistHandler,
}

impl DaoService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        let ledger = Arc::new(Ledger::new(store));
        Self {
            initialize: InitializeHandler::new(ledger.clone()),
            join_dao: JoinDaoHandler::new(ledger.clone()),
            create_proposal: CreateProposalHandler::new(ledger.clone()),
            vote_on_proposal: VoteOnProposalHandler::new(ledger.clone()),
            get_all_proposals: GetAllProposalsHandler::new(ledger.clone()),
            get_proposal: GetProposalHandler::new(ledger.clone()),
            get_member_count: GetMemberCountHandler::new(ledger.clone()),
            get_member_exist: GetMemberExistHandler::new(ledger),
        }
    }

    /// Open the configured store and build a service over it.
    pub async fn open(config: &StorageConfig) -> Result<Self, GovernanceError> {
        let store = open_state_store(config)
            .await
            .map_err(|e| GovernanceError::infrastructure(e.to_string()))?;
        Ok(Self::new(store))
    }

    pub async fn initialize(&self) -> Result<(), GovernanceError> {
        self.initialize.handle(InitializeCommand).await
    }

    pub async fn join_dao(&self, member: MemberId) -> Result<(), GovernanceError> {
        self.join_dao.handle(JoinDaoCommand { member }).await
    }

    pub async fn create_proposal(
        &self,
        creator: MemberId,
        title: impl Into<String>,
        description: impl Into<String>,
        vote_threshold: i32,
    ) -> Result<Proposal, GovernanceError> {
        self.create_proposal
            .handle(CreateProposalCommand {
                creator,
                title: title.into(),
                description: description.into(),
                vote_threshold,
            })
            .await
    }

    /// `vote` is `true` for yes, `false` for no.
    pub async fn vote_on_proposal(
        &self,
        voter: MemberId,
        proposal_id: &str,
        vote: bool,
    ) -> Result<Proposal, GovernanceError> {
        self.vote_on_proposal
            .handle(VoteOnProposalCommand {
                voter,
                proposal_id: proposal_id.to_string(),
                vote,
            })
            .await
    }

    pub async fn get_all_proposals(&self) -> Result<Vec<Proposal>, GovernanceError> {
        self.get_all_proposals.handle(GetAllProposalsQuery).await
    }

    pub async fn get_proposal(&self, proposal_id: &str) -> Result<Option<Proposal>, GovernanceError> {
        self.get_proposal
            .handle(GetProposalQuery {
                proposal_id: proposal_id.to_string(),
            })
            .await
    }

    pub async fn get_member_count(&self) -> Result<u32, GovernanceError> {
        self.get_member_count.handle(GetMemberCountQuery).await
    }

    pub async fn get_member_exist(&self, member: &MemberId) -> Result<bool, GovernanceError> {
        self.get_member_exist
            .handle(GetMemberExistQuery {
                member: member.clone(),
            })
            .await
    }
}
