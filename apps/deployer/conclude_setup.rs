use alloy::primitives::Address;
use alloy_chains::NamedChain;
use anyhow::{Context, Result};
use dotenv::dotenv;
use osx::{address_book::AddressBook, chain_data, explorer};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use utils::tracing::run_with_tracing;

const SETUP_CONTRACT: &str = "LensVotingSetup";

#[tokio::main]
async fn main() {
    dotenv().ok();
    run_with_tracing(run).await;
}

async fn run() -> Result<()> {
    let chain = chain_data::chain_from_env()?;
    let network = chain_data::network_key(chain);

    info!("Concluding {SETUP_CONTRACT} setup deployment");

    let address: Address = AddressBook::new()
        .get(network, SETUP_CONTRACT)?
        .parse()
        .context("Malformed address in the address book")?;

    // Explorer calls for freshly deployed contracts can fail on polygon for
    // the first few seconds
    if chain == NamedChain::Polygon {
        info!("Waiting 30secs for polygon to finish up...");
        sleep(Duration::from_secs(30)).await;
    }

    let status = explorer::verification_status(chain, address).await?;

    if status.verified {
        info!(
            address = %address,
            contract = status.contract_name.as_deref().unwrap_or(SETUP_CONTRACT),
            "Setup contract source is verified"
        );
    } else {
        warn!(
            address = %address,
            network = network,
            "Setup contract source is not verified yet"
        );
    }

    Ok(())
}
