//! GetMemberCountHandler - Query handler for the member counter.

use std::sync::Arc;

use crate::application::Ledger;
use crate::domain::governance::GovernanceError;

/// Query for the number of members.
#[derive(Debug, Clone, Default)]
pub struct GetMemberCountQuery;

/// Handler returning the stored member counter, `0` if never written.
pub struct GetMemberCountHandler {
    ledger: Arc<Ledger>,
}

impl GetMemberCountHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, _query: GetMemberCountQuery) -> Result<u32, GovernanceError> {
        self.ledger.begin().await.member_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::governance::test_support::*;

    #[tokio::test]
    async fn zero_on_empty_ledger() {
        let (ledger, _store) = empty_ledger();

        let count = GetMemberCountHandler::new(ledger)
            .handle(GetMemberCountQuery)
            .await
            .unwrap();

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn counts_distinct_joins() {
        let (ledger, _store) = ledger_with_members(&["alice", "bob", "carol"]).await;

        let count = GetMemberCountHandler::new(ledger)
            .handle(GetMemberCountQuery)
            .await
            .unwrap();

        assert_eq!(count, 3);
    }
}
