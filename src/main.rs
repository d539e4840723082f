//! Builders DAO bootstrap.
//!
//! Opens the configured ledger, runs the one-time setup if needed, and
//! prints the current proposals.

use std::error::Error;

use builders_dao::application::DaoService;
use builders_dao::config::AppConfig;
use builders_dao::domain::governance::GovernanceError;
use builders_dao::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.logging)?;
    tracing::info!(backend = ?config.storage.backend, "Starting Builders DAO");

    let service = DaoService::open(&config.storage).await?;

    match service.initialize().await {
        Ok(()) => {}
        Err(GovernanceError::AlreadyInitialized) => {
            tracing::info!("Ledger already initialized");
        }
        Err(e) => return Err(e.into()),
    }

    let proposals = service.get_all_proposals().await?;
    tracing::info!(
        proposals = proposals.len(),
        members = service.get_member_count().await?,
        "Ledger ready"
    );
    println!("{}", serde_json::to_string_pretty(&proposals)?);

    Ok(())
}
