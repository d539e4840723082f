//! State Store Port - Interface for the ledger's key-value state.
//!
//! The host persists ledger state as a flat key-value map. This port is
//! the only path from the ledger to that map, so the state machine can run
//! against an in-memory substitute in tests and a durable store in
//! production.
//!
//! # Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `initialized` | bool |
//! | `member_count` | integer |
//! | `next_proposal_id` | integer |
//! | `members/<identity>` | bool |
//! | `proposals/<decimal id>` | proposal record |

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{MemberId, ProposalId};

/// Address of one value in the ledger state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateKey {
    Initialized,
    MemberCount,
    NextProposalId,
    Member(MemberId),
    Proposal(ProposalId),
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Initialized => f.write_str("initialized"),
            StateKey::MemberCount => f.write_str("member_count"),
            StateKey::NextProposalId => f.write_str("next_proposal_id"),
            StateKey::Member(id) => write!(f, "members/{}", id),
            StateKey::Proposal(id) => write!(f, "proposals/{}", id),
        }
    }
}

/// Writes applied together by [`StateStore::commit`].
pub type WriteBatch = BTreeMap<StateKey, Value>;

/// Errors that can occur during state store operations
#[derive(Debug, thiserror::Error)]
pub enum StateStoreError {
    #[error("Failed to serialize value for '{key}': {reason}")]
    Serialization { key: String, reason: String },

    #[error("Failed to deserialize value for '{key}': {reason}")]
    Deserialization { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Commit rejected: {0}")]
    CommitRejected(String),
}

/// Port for reading and atomically writing ledger state
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `None` if the key was never written
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, StateStoreError>;

    /// Check whether a value is stored under `key`.
    async fn contains(&self, key: &StateKey) -> Result<bool, StateStoreError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Apply every write in `batch`, or none of them.
    ///
    /// # Errors
    /// Returns `StateStoreError` if the batch could not be applied; the
    /// store must then be unchanged.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StateStoreError>;

    /// Write a single value.
    async fn set(&self, key: StateKey, value: Value) -> Result<(), StateStoreError> {
        let mut batch = WriteBatch::new();
        batch.insert(key, value);
        self.commit(batch).await
    }
}
