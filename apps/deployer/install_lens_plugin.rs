use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use dotenv::dotenv;
use osx::{
    address_book::AddressBook,
    chain_data::network_key,
    dao::{DaoClient, ProposalParams},
    metadata::ProposalMetadata,
    voting::{LensVotingInstall, VoteOption, VotingMode, VotingSettings},
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
    let network = network_key(client.chain());

    let dao: Address = std::env::var("DAO_ADDRESS")
        .context("DAO_ADDRESS not set!")?
        .parse()
        .context("DAO_ADDRESS is not a valid address")?;
    let voting_plugin: Address = std::env::var("VOTING_PLUGIN_ADDRESS")
        .context("VOTING_PLUGIN_ADDRESS not set!")?
        .parse()
        .context("VOTING_PLUGIN_ADDRESS is not a valid address")?;
    let follow_nft: Address = std::env::var("FOLLOW_NFT_ADDRESS")
        .context("FOLLOW_NFT_ADDRESS not set!")?
        .parse()
        .context("FOLLOW_NFT_ADDRESS is not a valid address")?;

    // The repo this tooling published earlier
    let repo: Address = AddressBook::new()
        .get(network, "PluginRepo")?
        .parse()
        .context("Malformed address in the address book")?;

    let install = LensVotingInstall {
        voting_settings: VotingSettings {
            voting_mode: VotingMode::Standard,
            support_threshold: 0.5,
            min_participation: 0.25,
            min_duration: 60 * 60 * 24 * 2,
            min_proposer_voting_power: U256::ZERO,
        },
        follow_nft,
    };

    let install_data = client.lens_voting_install_settings(repo, &install).await?;
    let actions = client.create_install_actions(dao, install_data).await?;

    let metadata = ProposalMetadata {
        title: "Install Lens Voting Plugin".to_string(),
        summary: "Install Lens Voting Plugin".to_string(),
        description: "Voting power follows the Lens follow NFT".to_string(),
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

    info!(proposal_id = %proposal_id, dao = %dao, "Lens voting install proposal submitted");

    Ok(())
}
