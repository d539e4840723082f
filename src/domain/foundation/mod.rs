//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the state machine trait, and the error types
//! that form the vocabulary of the governance domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MemberId, ProposalId};
pub use state_machine::StateMachine;
