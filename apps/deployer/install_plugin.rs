use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use dotenv::dotenv;
use osx::{
    chain_data,
    dao::{DaoClient, ProposalParams},
    metadata::ProposalMetadata,
    voting::VoteOption,
};
use tracing::info;
use utils::tracing::run_with_tracing;

#[tokio::main]
async fn main() {
    dotenv().ok();
    run_with_tracing(run).await;
}

async fn run() -> Result<()> {
    let client = DaoClient::from_env()?;
    let deployer = chain_data::signer()?.address();

    let dao: Address = std::env::var("DAO_ADDRESS")
        .context("DAO_ADDRESS not set!")?
        .parse()
        .context("DAO_ADDRESS is not a valid address")?;
    let voting_plugin: Address = std::env::var("VOTING_PLUGIN_ADDRESS")
        .context("VOTING_PLUGIN_ADDRESS not set!")?
        .parse()
        .context("VOTING_PLUGIN_ADDRESS is not a valid address")?;

    let install_data = client.admin_install_settings(deployer).await?;
    let actions = client.create_install_actions(dao, install_data).await?;

    let metadata = ProposalMetadata {
        title: "Install Admin Plugin".to_string(),
        summary: "Install Admin Plugin".to_string(),
        description: "Install Admin Plugin".to_string(),
        resources: vec![],
        media: None,
    };

    let end_date = (Utc::now() + Duration::days(2)).timestamp() as u64;

    let proposal_id = client
        .create_proposal(
            voting_plugin,
            ProposalParams {
                metadata,
                actions,
                allow_failure_map: U256::ZERO,
                start_date: 0,
                end_date,
                creator_vote: VoteOption::None,
                execute_on_pass: false,
            },
        )
        .await?;

    info!(proposal_id = %proposal_id, dao = %dao, "Install proposal submitted");

    Ok(())
}
