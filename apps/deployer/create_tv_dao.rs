use alloy::primitives::{Address, U256};
use anyhow::Result;
use dotenv::dotenv;
use osx::{
    address_book::AddressBook,
    chain_data::{self, network_key},
    dao::{DaoClient, DaoSettings},
    metadata::DaoMetadata,
    voting::{TokenVotingInstall, TokenVotingToken, VotingMode, VotingSettings},
};
use rand::Rng;
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

    let dao_metadata = DaoMetadata {
        name: "DAO Box".to_string(),
        description: "DAOBox Maxi".to_string(),
        links: vec![],
    };

    let settings = DaoSettings {
        metadata: dao_metadata,
        subdomain: format!("lens-dao-{}", rand::rng().random_range(0..1_000_000u32)),
        trusted_forwarder: Address::ZERO,
        dao_uri: "https://daobox.app".to_string(),
    };

    let install = TokenVotingInstall {
        voting_settings: VotingSettings {
            voting_mode: VotingMode::EarlyExecution,
            support_threshold: 0.5,
            min_participation: 0.25,
            // seconds; the contracts enforce a 3600s minimum
            min_duration: 60 * 60 * 24 * 2,
            min_proposer_voting_power: U256::from(5000u64),
        },
        token: TokenVotingToken::New {
            name: "Token".to_string(),
            symbol: "TOK".to_string(),
            balances: vec![(deployer, U256::from(10u64))],
        },
    };

    let install_data = client.token_voting_install_settings(&install).await?;
    let dao = client.create_dao(settings, vec![install_data]).await?;

    info!(dao = %dao, "Token voting DAO is live");

    AddressBook::new().insert(
        network_key(client.chain()),
        "TokenVoting_DAO",
        &dao.to_string(),
    )?;

    Ok(())
}
