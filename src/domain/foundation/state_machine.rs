//! State machine trait for status enums.
//!
//! Lifecycle statuses implement this trait so every status change goes
//! through one validated path instead of direct assignment.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their valid transitions; validated transitions and
/// terminal-state detection come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ProposalStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (InProgress, Passed) | (InProgress, Denied))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             InProgress => vec![Passed, Denied],
///             Passed | Denied => vec![],
///         }
///     }
/// }
///
/// let status = ProposalStatus::InProgress.transition_to(ProposalStatus::Passed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
