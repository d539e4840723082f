//! JoinDaoHandler - Command handler for admitting a member.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::Ledger;
use crate::domain::foundation::MemberId;
use crate::domain::governance::GovernanceError;

/// Command to join the DAO.
#[derive(Debug, Clone)]
pub struct JoinDaoCommand {
    pub member: MemberId,
}

/// Handler for joining the DAO.
///
/// Sets the membership flag and bumps the member counter by one. A second
/// join by the same identity is rejected, so the counter never double
/// counts. There is no initialization guard.
pub struct JoinDaoHandler {
    ledger: Arc<Ledger>,
}

impl JoinDaoHandler {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }

    pub async fn handle(&self, cmd: JoinDaoCommand) -> Result<(), GovernanceError> {
        let mut tx = self.ledger.begin().await;

        if tx.is_member(&cmd.member).await? {
            warn!(member = %cmd.member, "Join rejected: already a member");
            return Err(GovernanceError::already_member(cmd.member));
        }

        let count = tx
            .member_count()
            .await?
            .checked_add(1)
            .ok_or_else(|| GovernanceError::infrastructure("member count overflow"))?;

        tx.admit_member(&cmd.member)?;
        tx.set_member_count(count)?;
        tx.commit().await?;

        info!(member = %cmd.member, member_count = count, "Member joined");
        Ok(())
    }
}
