use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utils::errors;

pub const WEB3_STORAGE_ENDPOINT: &str = "https://api.web3.storage";

#[derive(Deserialize, Debug)]
struct UploadResponse {
    cid: String,
}

/// Client for the web3.storage pinning service.
#[derive(Clone)]
pub struct IpfsClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl IpfsClient {
    pub fn from_env() -> Result<Self> {
        let token =
            std::env::var("WEB_3_STORAGE_KEY").context(errors::WEB_3_STORAGE_KEY_NOT_SET)?;
        Ok(Self::new_with_endpoint(WEB3_STORAGE_ENDPOINT.to_string(), token))
    }

    pub fn new_with_endpoint(endpoint: String, token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            token,
        }
    }

    /// Pins raw content and returns its content identifier.
    #[instrument(skip(self, content))]
    pub async fn upload(&self, content: String) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/upload", self.endpoint))
            .bearer_auth(&self.token)
            .body(content)
            .send()
            .await
            .context("Failed to reach the pinning service")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Pinning service returned {}", status);
        }

        let data: UploadResponse = response
            .json()
            .await
            .context("Failed to deserialize pinning service response")?;

        debug!(cid = %data.cid, "Pinned content");
        Ok(data.cid)
    }

    /// Serializes a document to JSON and pins it.
    pub async fn upload_json<T: Serialize>(&self, value: &T) -> Result<String> {
        self.upload(serde_json::to_string(value)?).await
    }
}

pub fn ipfs_uri(cid: &str) -> String {
    format!("ipfs://{}", cid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_upload_returns_cid() {
        let mut server = Server::new_async().await;
        let client = IpfsClient::new_with_endpoint(server.url(), "token".to_string());

        let mock = server
            .mock("POST", "/upload")
            .match_header("authorization", "Bearer token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"cid": "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"}"#)
            .create_async()
            .await;

        let cid = client
            .upload_json(&json!({"name": "DAO Box"}))
            .await
            .unwrap();

        assert_eq!(
            cid,
            "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_fails_on_service_error() {
        let mut server = Server::new_async().await;
        let client = IpfsClient::new_with_endpoint(server.url(), "token".to_string());

        server
            .mock("POST", "/upload")
            .with_status(401)
            .create_async()
            .await;

        let result = client.upload("{}".to_string()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_ipfs_uri_prefixes_the_cid() {
        assert_eq!(ipfs_uri("bafy"), "ipfs://bafy");
    }
}
