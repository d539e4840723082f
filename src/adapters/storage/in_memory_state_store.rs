//! In-Memory State Store Adapter
//!
//! Keeps ledger state in a map behind a lock.
//! Useful for testing and development.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{StateKey, StateStore, StateStoreError, WriteBatch};

/// In-memory storage for ledger state
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
    fail_next_commit: Arc<AtomicBool>,
}

impl InMemoryStateStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Get the number of stored entries
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Make the next commit fail without applying anything
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StateStore for InMemoryStateStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>, StateStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&key.to_string()).cloned())
    }

    async fn contains(&self, key: &StateKey) -> Result<bool, StateStoreError> {
        let entries = self.entries.read().await;
        Ok(entries.contains_key(&key.to_string()))
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StateStoreError> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(StateStoreError::CommitRejected(
                "simulated commit failure".to_string(),
            ));
        }

        // One write lock for the whole batch keeps readers from seeing half of it
        let mut entries = self.entries.write().await;
        for (key, value) in batch {
            entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MemberId;
    use serde_json::json;

    fn alice_key() -> StateKey {
        StateKey::Member(MemberId::new("alice").unwrap())
    }

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.get(&StateKey::Initialized).await.unwrap(), None);
        assert!(!store.contains(&StateKey::Initialized).await.unwrap());
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryStateStore::new();
        store.set(alice_key(), json!(true)).await.unwrap();

        assert_eq!(store.get(&alice_key()).await.unwrap(), Some(json!(true)));
        assert!(store.contains(&alice_key()).await.unwrap());
    }

    #[tokio::test]
    async fn commit_applies_whole_batch() {
        let store = InMemoryStateStore::new();
        let mut batch = WriteBatch::new();
        batch.insert(StateKey::MemberCount, json!(1));
        batch.insert(alice_key(), json!(true));

        store.commit(batch).await.unwrap();

        assert_eq!(store.entry_count().await, 2);
        assert_eq!(store.get(&StateKey::MemberCount).await.unwrap(), Some(json!(1)));
    }

    #[tokio::test]
    async fn failed_commit_applies_nothing() {
        let store = InMemoryStateStore::new();
        store.fail_next_commit();

        let mut batch = WriteBatch::new();
        batch.insert(StateKey::MemberCount, json!(1));
        let result = store.commit(batch).await;

        assert!(matches!(result, Err(StateStoreError::CommitRejected(_))));
        assert_eq!(store.entry_count().await, 0);
    }

    #[tokio::test]
    async fn failure_is_armed_for_one_commit_only() {
        let store = InMemoryStateStore::new();
        store.fail_next_commit();

        assert!(store.set(StateKey::Initialized, json!(true)).await.is_err());
        assert!(store.set(StateKey::Initialized, json!(true)).await.is_ok());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryStateStore::new();
        let other = store.clone();
        store.set(StateKey::Initialized, json!(true)).await.unwrap();

        assert!(other.contains(&StateKey::Initialized).await.unwrap());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemoryStateStore::new();
        store.set(StateKey::Initialized, json!(true)).await.unwrap();
        store.clear().await;
        assert_eq!(store.entry_count().await, 0);
    }
}
