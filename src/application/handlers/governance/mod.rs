//! Governance command and query handlers.

mod create_proposal;
mod get_all_proposals;
mod get_member_count;
mod get_member_exist;
mod get_proposal;
mod initialize;
mod join_dao;
mod vote_on_proposal;

pub use create_proposal::{CreateProposalCommand, CreateProposalHandler, CreateProposalResult};
pub use get_all_proposals::{GetAllProposalsHandler, GetAllProposalsQuery};
pub use get_member_count::{GetMemberCountHandler, GetMemberCountQuery};
pub use get_member_exist::{GetMemberExistHandler, GetMemberExistQuery};
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
pub use initialize::{InitializeCommand, InitializeHandler};
pub use join_dao::{JoinDaoCommand, JoinDaoHandler};
pub use vote_on_proposal::{VoteOnProposalCommand, VoteOnProposalHandler, VoteOnProposalResult};
