use alloy::primitives::Address;
use anyhow::Result;
use dotenv::dotenv;
use osx::{
    address_book::AddressBook,
    chain_data::{self, network_key},
    dao::{DaoClient, DaoSettings},
    metadata::DaoMetadata,
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

    let install_data = client.admin_install_settings(deployer).await?;
    let dao = client.create_dao(settings, vec![install_data]).await?;

    info!(dao = %dao, "Admin DAO is live");

    AddressBook::new().insert(network_key(client.chain()), "Admin_DAO", &dao.to_string())?;

    Ok(())
}
