//! GetMemberExistHandler - Query handler for membership checks.

use std::sync::Arc;

use crate::application::Ledger;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernanceError;

/// Query whether an identity has joined.
#[derive(Debug, Clone)]
pub struct GetMemberExistQuery {
    pub member: MemberId,
}

pub struct GetMemberExistHandler {
    ledger: Arc<Ledger>,
}

impl GetMemberExistHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, query: GetMemberExistQuery) -> Result<bool, GovernanceError> {
        self.ledger.begin().await.is_member(&query.member).await
    }
}
