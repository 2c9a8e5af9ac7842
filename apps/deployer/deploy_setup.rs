use alloy::{network::TransactionBuilder, providers::Provider, rpc::types::TransactionRequest};
use anyhow::{Context, Result};
use dotenv::dotenv;
use osx::{address_book::AddressBook, artifacts, chain_data};
use tracing::info;
use utils::{errors, tracing::run_with_tracing};

const SETUP_CONTRACT: &str = "LensVotingSetup";

#[tokio::main]
async fn main() {
    dotenv().ok();
    run_with_tracing(run).await;
}

async fn run() -> Result<()> {
    let chain = chain_data::chain_from_env()?;
    let provider = chain_data::signing_provider(chain)?;

    info!(network = chain_data::network_key(chain), "Creating {SETUP_CONTRACT}");

    let artifact_path =
        std::env::var("SETUP_ARTIFACT").context(errors::SETUP_ARTIFACT_NOT_SET)?;
    let creation_code = artifacts::read_creation_code(&artifact_path)?;

    let tx = TransactionRequest::default().with_deploy_code(creation_code);
    let receipt = provider
        .send_transaction(tx)
        .await
        .context("Deployment transaction failed to send")?
        .get_receipt()
        .await
        .context("Deployment transaction was not mined")?;

    let address = receipt
        .contract_address
        .context("Deployment receipt is missing the contract address")?;

    info!(address = %address, tx = %receipt.transaction_hash, "{SETUP_CONTRACT} deployed");

    AddressBook::new().insert(
        chain_data::network_key(chain),
        SETUP_CONTRACT,
        &address.to_string(),
    )?;

    Ok(())
}
