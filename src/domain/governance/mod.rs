//! Governance module - membership and proposal voting rules.
//!
//! # Proposal lifecycle
//!
//! ```text
//! IN PROGRESS ──(yes tally ≥ threshold)──► PASSED
//!      │
//!      └──────(no tally ≥ threshold)───► DENIED
//! ```

mod errors;
mod proposal;
mod status;

pub use errors::{GovernanceError, MemberAction};
pub use proposal::{
    Ballot, Proposal, GENESIS_DESCRIPTION, GENESIS_TITLE, GENESIS_VOTE_THRESHOLD,
};
pub use status::ProposalStatus;
