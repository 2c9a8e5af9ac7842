use crate::chain_data::get_chain_config;
use alloy::primitives::Address;
use alloy_chains::NamedChain;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Deserialize, PartialEq, Debug)]
pub struct SourceCodeEntry {
    #[serde(rename = "SourceCode")]
    source_code: String,
    #[serde(rename = "ContractName")]
    contract_name: String,
}

#[derive(Deserialize, Debug)]
pub struct SourceCodeResponse {
    status: String,
    message: String,
    result: Vec<SourceCodeEntry>,
}

#[derive(Debug, PartialEq)]
pub struct VerificationStatus {
    pub verified: bool,
    pub contract_name: Option<String>,
}

/// Asks the chain explorer whether the contract's source is verified.
pub async fn verification_status(
    network: NamedChain,
    address: Address,
) -> Result<VerificationStatus> {
    let config = get_chain_config(network)?;
    let api_url = config
        .scan_api_url
        .with_context(|| format!("No explorer configured for {}", network))?;
    let key_env = config
        .scan_api_key_env
        .with_context(|| format!("No explorer API key configured for {}", network))?;
    let api_key = std::env::var(key_env).with_context(|| format!("{} not set!", key_env))?;

    verification_status_at(api_url, &api_key, address).await
}

pub async fn verification_status_at(
    api_url: &str,
    api_key: &str,
    address: Address,
) -> Result<VerificationStatus> {
    let address = address.to_string();
    let response = reqwest::Client::new()
        .get(api_url)
        .query(&[
            ("module", "contract"),
            ("action", "getsourcecode"),
            ("address", address.as_str()),
            ("apikey", api_key),
        ])
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .context("Failed to reach the explorer")?;

    let contents = response.text().await?;
    let data: SourceCodeResponse =
        serde_json::from_str(&contents).context("Failed to deserialize explorer response")?;

    debug!(status = %data.status, message = %data.message, "Explorer answered");

    // An unverified contract comes back with status 1 and an empty source
    let entry = data.result.first();
    let verified = data.status == "1"
        && entry.map(|e| !e.source_code.is_empty()).unwrap_or(false);

    Ok(VerificationStatus {
        verified,
        contract_name: entry
            .filter(|e| !e.contract_name.is_empty())
            .map(|e| e.contract_name.clone()),
    })
}
