use alloy::primitives::{Address, Bytes};
use anyhow::{Context, Result};
use dotenv::dotenv;
use osx::{
    address_book::AddressBook,
    bindings::{PluginRepoFactory, PluginRepoRegistry},
    chain_data,
    deployments::Deployment,
    ipfs::{ipfs_uri, IpfsClient},
    metadata,
    receipts::find_event,
};
use tracing::{info, warn};
use utils::tracing::run_with_tracing;

const SETUP_CONTRACT: &str = "LensVotingSetup";
const SUBDOMAIN: &str = "lens";

#[tokio::main]
async fn main() {
    dotenv().ok();
    run_with_tracing(run).await;
}

async fn run() -> Result<()> {
    let chain = chain_data::chain_from_env()?;
    let network = chain_data::network_key(chain);
    let provider = chain_data::signing_provider(chain)?;
    let deployment = Deployment::from_chain(chain)
        .with_context(|| format!("No OSx deployment for network {}", chain))?;
    let ipfs = IpfsClient::from_env()?;
    let book = AddressBook::new();

    warn!(
        subdomain = SUBDOMAIN,
        "Creating plugin repo. Make sure the repo is not created more than once with the same subdomain."
    );

    let setup_address: Address = book
        .get(network, SETUP_CONTRACT)?
        .parse()
        .context("Malformed address in the address book")?;

    let release_uri = ipfs_uri(&ipfs.upload_json(&metadata::release_metadata()).await?);
    let build_uri = ipfs_uri(&ipfs.upload_json(&metadata::build_metadata()).await?);
    info!(uri = %release_uri, "Uploaded metadata of release 1");
    info!(uri = %build_uri, "Uploaded metadata of build 1");

    let factory = PluginRepoFactory::new(deployment.plugin_repo_factory, provider);
    let maintainer = chain_data::signer()?.address();

    let receipt = factory
        .createPluginRepoWithFirstVersion(
            SUBDOMAIN.to_string(),
            setup_address,
            maintainer,
            Bytes::from(release_uri.into_bytes()),
            Bytes::from(build_uri.into_bytes()),
        )
        .send()
        .await
        .context("createPluginRepoWithFirstVersion transaction failed to send")?
        .get_receipt()
        .await
        .context("createPluginRepoWithFirstVersion transaction was not mined")?;

    let registered: PluginRepoRegistry::PluginRepoRegistered = find_event(&receipt)?;

    info!(
        repo = %registered.pluginRepo,
        subdomain = %registered.subdomain,
        tx = %receipt.transaction_hash,
        "PluginRepo deployed"
    );

    book.insert(network, "PluginRepo", &registered.pluginRepo.to_string())?;
    book.insert(network, SETUP_CONTRACT, &setup_address.to_string())?;

    Ok(())
}
