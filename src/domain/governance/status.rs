//! Proposal status state machine.
//!
//! A proposal starts `IN PROGRESS` and resolves exactly once, to either
//! `PASSED` or `DENIED`, when a vote pushes a tally to its threshold.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution status of a proposal.
///
/// Serialized with the ledger's literal status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Open for votes, no threshold reached yet.
    #[serde(rename = "IN PROGRESS")]
    InProgress,

    /// Yes votes reached the threshold.
    #[serde(rename = "PASSED")]
    Passed,

    /// No votes reached the threshold.
    #[serde(rename = "DENIED")]
    Denied,
}

impl ProposalStatus {
    /// Returns the ledger string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::InProgress => "IN PROGRESS",
            ProposalStatus::Passed => "PASSED",
            ProposalStatus::Denied => "DENIED",
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, ProposalStatus::InProgress)
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for ProposalStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ProposalStatus::*;
        matches!((self, target), (InProgress, Passed) | (InProgress, Denied))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ProposalStatus::*;
        match self {
            InProgress => vec![Passed, Denied],
            Passed | Denied => vec![],
        }
    }
}
