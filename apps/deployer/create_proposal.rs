use alloy::primitives::{Address, U256};
use anyhow::{Context, Result};
use dotenv::dotenv;
use osx::{
    bindings::LensVotingPlugin,
    dao::{DaoClient, ProposalParams},
    metadata::{Media, ProposalMetadata, ResourceLink},
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

    let plugin: Address = std::env::var("LENS_PLUGIN_ADDRESS")
        .context("LENS_PLUGIN_ADDRESS not set!")?
        .parse()
        .context("LENS_PLUGIN_ADDRESS is not a valid address")?;

    let voting = LensVotingPlugin::new(plugin, client.provider().clone());
    let voting_token = voting
        .getVotingToken()
        .call()
        .await
        .context("getVotingToken call failed")?;
    info!(token = %voting_token, "Voting power comes from the follow NFT");

    let metadata = ProposalMetadata {
        title: "Test Proposal".to_string(),
        summary: "This is a short description".to_string(),
        description: "This is a long description".to_string(),
        resources: vec![
            ResourceLink {
                name: "Discord".to_string(),
                url: "https://discord.com/...".to_string(),
            },
            ResourceLink {
                name: "Website".to_string(),
                url: "https://website...".to_string(),
            },
        ],
        media: Some(Media {
            header: Some("https://...".to_string()),
            logo: Some("https://...".to_string()),
        }),
    };

    let proposal_id = client
        .create_proposal(
            plugin,
            ProposalParams {
                metadata,
                actions: vec![],
                allow_failure_map: U256::ZERO,
                start_date: 0,
                end_date: 0,
                creator_vote: VoteOption::None,
                execute_on_pass: false,
            },
        )
        .await?;

    info!(proposal_id = %proposal_id, "Vote is open");

    Ok(())
}
