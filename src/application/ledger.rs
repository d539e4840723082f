//! Ledger - serialized, all-or-nothing access to governance state.
//!
//! Every operation runs inside one [`LedgerTransaction`]. Opening a
//! transaction takes the ledger's gate, so transactions never interleave.
//! Writes are buffered and only reach the store on [`LedgerTransaction::commit`];
//! dropping a transaction discards them.
//!
//! ```ignore
//! let mut tx = ledger.begin().await;
//! if tx.is_member(&member).await? {
//!     return Err(GovernanceError::already_member(member)); // nothing written
//! }
//! tx.admit_member(&member)?;
//! tx.commit().await?;
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{MemberId, ProposalId};
use crate::domain::governance::{GovernanceError, Proposal};
use crate::ports::{StateKey, StateStore, StateStoreError, WriteBatch};

/// Governance state reached through a [`StateStore`].
pub struct Ledger {
    store: Arc<dyn StateStore>,
    gate: Mutex<()>,
}

impl Ledger {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            gate: Mutex::new(()),
        }
    }

    /// Start a transaction, waiting for any open one to finish.
    pub async fn begin(&self) -> LedgerTransaction<'_> {
        let guard = self.gate.lock().await;
        LedgerTransaction {
            _guard: guard,
            store: self.store.as_ref(),
            writes: WriteBatch::new(),
        }
    }
}

/// One unit of work over the ledger.
///
/// Reads see this transaction's own buffered writes first. Absent slots read
/// as their defaults: `false`, `0`, or no proposal.
pub struct LedgerTransaction<'a> {
    _guard: MutexGuard<'a, ()>,
    store: &'a dyn StateStore,
    writes: WriteBatch,
}

impl LedgerTransaction<'_> {
    pub async fn is_initialized(&self) -> Result<bool, GovernanceError> {
        Ok(self.read(&StateKey::Initialized).await?.unwrap_or(false))
    }

    pub fn mark_initialized(&mut self) -> Result<(), GovernanceError> {
        self.write(StateKey::Initialized, &true)
    }

    pub async fn is_member(&self, member: &MemberId) -> Result<bool, GovernanceError> {
        Ok(self
            .read(&StateKey::Member(member.clone()))
            .await?
            .unwrap_or(false))
    }

    /// Sets the membership flag. Does not touch the member counter.
    pub fn admit_member(&mut self, member: &MemberId) -> Result<(), GovernanceError> {
        self.write(StateKey::Member(member.clone()), &true)
    }

    pub async fn member_count(&self) -> Result<u32, GovernanceError> {
        Ok(self.read(&StateKey::MemberCount).await?.unwrap_or(0))
    }

    pub fn set_member_count(&mut self, count: u32) -> Result<(), GovernanceError> {
        self.write(StateKey::MemberCount, &count)
    }

    /// Identifier the next created proposal will receive.
    pub async fn next_proposal_id(&self) -> Result<ProposalId, GovernanceError> {
        let next: u64 = self.read(&StateKey::NextProposalId).await?.unwrap_or(0);
        Ok(ProposalId::new(next))
    }

    pub fn set_next_proposal_id(&mut self, id: ProposalId) -> Result<(), GovernanceError> {
        self.write(StateKey::NextProposalId, &id.value())
    }

    pub async fn proposal(&self, id: ProposalId) -> Result<Option<Proposal>, GovernanceError> {
        self.read(&StateKey::Proposal(id)).await
    }

    /// Stores the proposal under its own identifier, replacing any previous record.
    pub fn put_proposal(&mut self, proposal: &Proposal) -> Result<(), GovernanceError> {
        self.write(StateKey::Proposal(proposal.id), proposal)
    }

    /// Number of buffered writes.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Apply all buffered writes atomically.
    ///
    /// # Errors
    ///
    /// `Infrastructure` if the store rejects the batch; nothing is applied.
    pub async fn commit(self) -> Result<(), GovernanceError> {
        let LedgerTransaction {
            _guard,
            store,
            writes,
        } = self;

        if writes.is_empty() {
            return Ok(());
        }

        let count = writes.len();
        store.commit(writes).await.map_err(store_failure)?;
        tracing::debug!(writes = count, "Ledger transaction committed");
        Ok(())
    }

    async fn read<T: DeserializeOwned>(&self, key: &StateKey) -> Result<Option<T>, GovernanceError> {
        let value = match self.writes.get(key) {
            Some(buffered) => Some(buffered.clone()),
            None => self.store.get(key).await.map_err(store_failure)?,
        };

        value
            .map(|v| {
                serde_json::from_value(v).map_err(|e| {
                    store_failure(StateStoreError::Deserialization {
                        key: key.to_string(),
                        reason: e.to_string(),
                    })
                })
            })
            .transpose()
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: StateKey, value: &T) -> Result<(), GovernanceError> {
        let value = serde_json::to_value(value).map_err(|e| {
            store_failure(StateStoreError::Serialization {
                key: key.to_string(),
                reason: e.to_string(),
            })
        })?;
        self.writes.insert(key, value);
        Ok(())
    }
}

fn store_failure(err: StateStoreError) -> GovernanceError {
    tracing::error!(error = %err, "Ledger store failure");
    GovernanceError::infrastructure(err.to_string())
}
