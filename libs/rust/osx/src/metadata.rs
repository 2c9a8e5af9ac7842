//! Human-readable JSON documents pinned to IPFS. Only their content
//! identifier ends up on-chain.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// General information about a DAO.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DaoMetadata {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<ResourceLink>,
}

/// Human-readable information about a proposal.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProposalMetadata {
    pub title: String,
    pub summary: String,
    pub description: String,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Release metadata published alongside release 1 of the plugin repo.
pub fn release_metadata() -> Value {
    json!({
        "name": "Lens Voting",
        "description": "Token voting governed by a Lens follow NFT",
        "images": {}
    })
}

/// Build metadata describing the setup contract's installation inputs.
pub fn build_metadata() -> Value {
    json!({
        "ui": {},
        "change": "Initial build.",
        "pluginSetup": {
            "prepareInstallation": {
                "description": "The information required for the installation.",
                "inputs": [
                    {
                        "components": [
                            {"internalType": "uint8", "name": "votingMode", "type": "uint8"},
                            {"internalType": "uint64", "name": "supportThreshold", "type": "uint64"},
                            {"internalType": "uint64", "name": "minParticipation", "type": "uint64"},
                            {"internalType": "uint64", "name": "minDuration", "type": "uint64"},
                            {"internalType": "uint256", "name": "minProposerVotingPower", "type": "uint256"}
                        ],
                        "internalType": "struct MajorityVotingBase.VotingSettings",
                        "name": "votingSettings",
                        "type": "tuple"
                    },
                    {
                        "internalType": "address",
                        "name": "followNft",
                        "type": "address"
                    }
                ]
            },
            "prepareUninstallation": {
                "description": "No input is required for the uninstallation.",
                "inputs": []
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_metadata_serializes_without_empty_media() {
        let metadata = ProposalMetadata {
            title: "Test Proposal".into(),
            summary: "This is a short description".into(),
            description: "This is a long description".into(),
            resources: vec![ResourceLink {
                name: "Discord".into(),
                url: "https://discord.com/...".into(),
            }],
            media: None,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert!(value.get("media").is_none());
        assert_eq!(value["resources"][0]["name"], "Discord");
    }

    #[test]
    fn build_metadata_describes_the_install_inputs() {
        let value = build_metadata();
        let inputs = &value["pluginSetup"]["prepareInstallation"]["inputs"];
        assert_eq!(inputs.as_array().unwrap().len(), 2);
        assert_eq!(inputs[1]["type"], "address");
    }
}
