use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use alloy_chains::NamedChain;
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;
use utils::errors;

// Chain-specific RPC and explorer configuration
#[derive(Clone)]
pub struct ChainConfig {
    pub rpc_env: &'static str,
    pub scan_api_url: Option<&'static str>,
    pub scan_api_key_env: Option<&'static str>,
}

lazy_static! {
    static ref CHAIN_CONFIG_MAP: HashMap<NamedChain, ChainConfig> = vec![
        (
            NamedChain::Mainnet,
            ChainConfig {
                rpc_env: "MAINNET_NODE_URL",
                scan_api_url: Some("https://api.etherscan.io/api"),
                scan_api_key_env: Some("ETHERSCAN_KEY"),
            }
        ),
        (
            NamedChain::Goerli,
            ChainConfig {
                rpc_env: "GOERLI_NODE_URL",
                scan_api_url: Some("https://api-goerli.etherscan.io/api"),
                scan_api_key_env: Some("ETHERSCAN_KEY"),
            }
        ),
        (
            NamedChain::Polygon,
            ChainConfig {
                rpc_env: "POLYGON_NODE_URL",
                scan_api_url: Some("https://api.polygonscan.com/api"),
                scan_api_key_env: Some("POLYGONSCAN_KEY"),
            }
        ),
        (
            NamedChain::PolygonMumbai,
            ChainConfig {
                rpc_env: "MUMBAI_NODE_URL",
                scan_api_url: Some("https://api-testnet.polygonscan.com/api"),
                scan_api_key_env: Some("POLYGONSCAN_KEY"),
            }
        ),
    ]
    .into_iter()
    .collect();
}

pub fn get_chain_config(network: NamedChain) -> Result<ChainConfig> {
    CHAIN_CONFIG_MAP
        .get(&network)
        .cloned()
        .context(format!("Unsupported network: {}", network))
}

/// Network selected by the deployment runner through the `NETWORK` env var.
pub fn chain_from_env() -> Result<NamedChain> {
    let name = std::env::var("NETWORK").context(errors::NETWORK_NOT_SET)?;
    chain_from_name(&name)
}

pub fn chain_from_name(name: &str) -> Result<NamedChain> {
    match name {
        "mainnet" => Ok(NamedChain::Mainnet),
        "goerli" => Ok(NamedChain::Goerli),
        "polygon" => Ok(NamedChain::Polygon),
        "mumbai" | "polygonMumbai" => Ok(NamedChain::PolygonMumbai),
        other => Err(anyhow!("Unsupported network: {}", other)),
    }
}

/// Key under which a chain's contracts are filed in `deployed_contracts.json`.
pub fn network_key(network: NamedChain) -> &'static str {
    match network {
        NamedChain::PolygonMumbai => "mumbai",
        NamedChain::Goerli => "goerli",
        NamedChain::Polygon => "polygon",
        _ => "mainnet",
    }
}

fn rpc_url(network: NamedChain) -> Result<String> {
    let config = get_chain_config(network)?;
    std::env::var(config.rpc_env).with_context(|| format!("{} not set!", config.rpc_env))
}

/// Read-only provider for the given chain.
pub fn provider(network: NamedChain) -> Result<DynProvider> {
    let url = rpc_url(network)?;
    Ok(ProviderBuilder::new()
        .connect_http(url.parse().context("Invalid node URL")?)
        .erased())
}

/// The deployer key. `ETH_KEY` holds a comma-separated list of private keys
/// (hardhat account list semantics); the first one signs everything.
pub fn signer() -> Result<PrivateKeySigner> {
    let raw = std::env::var("ETH_KEY").context(errors::ETH_KEY_NOT_SET)?;
    let key = raw.split(',').next().unwrap_or_default().trim();
    key.parse::<PrivateKeySigner>()
        .map_err(|_| anyhow!("ETH_KEY does not contain a valid private key"))
}

/// Provider with the deployer wallet attached, for sending transactions.
pub fn signing_provider(network: NamedChain) -> Result<DynProvider> {
    let url = rpc_url(network)?;
    let wallet = EthereumWallet::from(signer()?);
    Ok(ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(url.parse().context("Invalid node URL")?)
        .erased())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_from_name_maps_supported_networks() {
        assert_eq!(chain_from_name("mainnet").unwrap(), NamedChain::Mainnet);
        assert_eq!(chain_from_name("goerli").unwrap(), NamedChain::Goerli);
        assert_eq!(chain_from_name("polygon").unwrap(), NamedChain::Polygon);
        assert_eq!(chain_from_name("mumbai").unwrap(), NamedChain::PolygonMumbai);
        assert_eq!(
            chain_from_name("polygonMumbai").unwrap(),
            NamedChain::PolygonMumbai
        );
    }

    #[test]
    fn chain_from_name_rejects_unknown_networks() {
        assert!(chain_from_name("arbitrumOne").is_err());
        assert!(chain_from_name("").is_err());
    }

    #[test]
    fn network_key_round_trips_through_chain_from_name() {
        for chain in [
            NamedChain::Mainnet,
            NamedChain::Goerli,
            NamedChain::Polygon,
            NamedChain::PolygonMumbai,
        ] {
            assert_eq!(chain_from_name(network_key(chain)).unwrap(), chain);
        }
    }
}
