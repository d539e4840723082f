//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations over the ledger.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

mod dao_service;
pub mod handlers;
mod ledger;

pub use dao_service::DaoService;
pub use handlers::{
    CreateProposalCommand, CreateProposalHandler, CreateProposalResult,
    GetAllProposalsHandler, GetAllProposalsQuery,
    GetMemberCountHandler, GetMemberCountQuery,
    GetMemberExistHandler, GetMemberExistQuery,
    GetProposalHandler, GetProposalQuery,
    InitializeCommand, InitializeHandler,
    JoinDaoCommand, JoinDaoHandler,
    VoteOnProposalCommand, VoteOnProposalHandler, VoteOnProposalResult,
};
pub use ledger::{Ledger, LedgerTransaction};
