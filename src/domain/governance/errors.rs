//! Governance-specific error types.
//!
//! Every variant aborts the current ledger transaction; nothing it buffered
//! is committed.
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | AlreadyInitialized | Initialize |
//! | AlreadyMember | Join |
//! | NotAMember | CreateProposal, Vote |
//! | ProposalNotFound | Vote |
//! | AlreadyVoted | Vote |
//! | Infrastructure | any operation, on store failure |

use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};

/// The member-only action that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    CreateProposal,
    Vote,
}

impl fmt::Display for MemberAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberAction::CreateProposal => f.write_str("create proposals"),
            MemberAction::Vote => f.write_str("vote"),
        }
    }
}

/// Governance-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// Initialize was already run.
    AlreadyInitialized,

    /// Identity has already joined.
    AlreadyMember(MemberId),

    /// Identity has not joined and cannot perform the action.
    NotAMember {
        member: MemberId,
        action: MemberAction,
    },

    /// No proposal is stored under the identifier. Holds the identifier as
    /// the caller supplied it.
    ProposalNotFound(String),

    /// Voter already appears in the proposal's yes or no list.
    AlreadyVoted {
        member: MemberId,
        proposal_id: String,
    },

    /// Store failure or unreadable state.
    Infrastructure(String),
}

impl GovernanceError {
    pub fn already_initialized() -> Self {
        GovernanceError::AlreadyInitialized
    }

    pub fn already_member(member: MemberId) -> Self {
        GovernanceError::AlreadyMember(member)
    }

    pub fn not_a_member(member: MemberId, action: MemberAction) -> Self {
        GovernanceError::NotAMember { member, action }
    }

    pub fn proposal_not_found(proposal_id: impl Into<String>) -> Self {
        GovernanceError::ProposalNotFound(proposal_id.into())
    }

    pub fn already_voted(member: MemberId, proposal_id: impl Into<String>) -> Self {
        GovernanceError::AlreadyVoted {
            member,
            proposal_id: proposal_id.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GovernanceError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GovernanceError::AlreadyInitialized => ErrorCode::AlreadyInitialized,
            GovernanceError::AlreadyMember(_) => ErrorCode::AlreadyMember,
            GovernanceError::NotAMember { .. } => ErrorCode::NotAMember,
            GovernanceError::ProposalNotFound(_) => ErrorCode::ProposalNotFound,
            GovernanceError::AlreadyVoted { .. } => ErrorCode::AlreadyVoted,
            GovernanceError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a human-readable error message.
    pub fn message(&self) -> String {
        match self {
            GovernanceError::AlreadyInitialized => "already initialized".to_string(),
            GovernanceError::AlreadyMember(member) => {
                format!("Member is already in the DAO: {}", member)
            }
            GovernanceError::NotAMember { member, action } => {
                format!("Only DAO members can {} ({} has not joined)", action, member)
            }
            GovernanceError::ProposalNotFound(id) => format!("Proposal not found: {}", id),
            GovernanceError::AlreadyVoted {
                member,
                proposal_id,
            } => format!("Member already voted: {} on proposal {}", member, proposal_id),
            GovernanceError::Infrastructure(msg) => format!("Ledger error: {}", msg),
        }
    }

    /// Returns true if retrying the same call could succeed.
    ///
    /// Rejections are deterministic for a given state, so only store
    /// failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GovernanceError::Infrastructure(_))
    }
}

impl fmt::Display for GovernanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for GovernanceError {}

impl From<GovernanceError> for DomainError {
    fn from(err: GovernanceError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
