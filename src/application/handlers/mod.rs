//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod governance;

pub use governance::{
    // Commands
    CreateProposalCommand, CreateProposalHandler, CreateProposalResult,
    InitializeCommand, InitializeHandler,
    JoinDaoCommand, JoinDaoHandler,
    VoteOnProposalCommand, VoteOnProposalHandler, VoteOnProposalResult,
    // Queries
    GetAllProposalsHandler, GetAllProposalsQuery,
    GetMemberCountHandler, GetMemberCountQuery,
    GetMemberExistHandler, GetMemberExistQuery,
    GetProposalHandler, GetProposalQuery,
};
