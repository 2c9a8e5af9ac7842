use alloy::primitives::{Address, Bytes};
use anyhow::{Context, Result};
use dotenv::dotenv;
use osx::{
    address_book::AddressBook,
    bindings::PluginRepo,
    chain_data,
    ipfs::{ipfs_uri, IpfsClient},
    metadata,
};
use tracing::info;
use utils::tracing::run_with_tracing;

const SETUP_CONTRACT: &str = "LensVotingSetup";
const RELEASE_ID: u8 = 1;

#[tokio::main]
async fn main() {
    dotenv().ok();
    run_with_tracing(run).await;
}

async fn run() -> Result<()> {
    let chain = chain_data::chain_from_env()?;
    let network = chain_data::network_key(chain);
    let provider = chain_data::signing_provider(chain)?;
    let ipfs = IpfsClient::from_env()?;
    let book = AddressBook::new();

    let setup_address: Address = book
        .get(network, SETUP_CONTRACT)?
        .parse()
        .context("Malformed address in the address book")?;
    let repo_address: Address = book
        .get(network, "PluginRepo")?
        .parse()
        .context("Malformed address in the address book")?;

    let release_uri = ipfs_uri(&ipfs.upload_json(&metadata::release_metadata()).await?);
    let build_uri = ipfs_uri(&ipfs.upload_json(&metadata::build_metadata()).await?);
    info!(uri = %release_uri, "Uploaded metadata of release {RELEASE_ID}");
    info!(uri = %build_uri, "Uploaded metadata of the new build");

    let repo = PluginRepo::new(repo_address, provider);
    let receipt = repo
        .createVersion(
            RELEASE_ID,
            setup_address,
            Bytes::from(build_uri.into_bytes()),
            Bytes::from(release_uri.into_bytes()),
        )
        .send()
        .await
        .context("createVersion transaction failed to send")?
        .get_receipt()
        .await
        .context("createVersion transaction was not mined")?;

    info!(
        repo = %repo_address,
        setup = %setup_address,
        tx = %receipt.transaction_hash,
        "New version published"
    );

    book.insert(network, SETUP_CONTRACT, &setup_address.to_string())?;

    Ok(())
}
