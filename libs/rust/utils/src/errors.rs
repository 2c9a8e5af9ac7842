//env
pub const NETWORK_NOT_SET: &str = "NETWORK not set!";
pub const ETH_KEY_NOT_SET: &str = "ETH_KEY not set!";
pub const WEB_3_STORAGE_KEY_NOT_SET: &str = "WEB_3_STORAGE_KEY not set!";
pub const SETUP_ARTIFACT_NOT_SET: &str = "SETUP_ARTIFACT not set!";
pub const MAINNET_NODE_URL_NOT_SET: &str = "MAINNET_NODE_URL not set!";
pub const GOERLI_NODE_URL_NOT_SET: &str = "GOERLI_NODE_URL not set!";
pub const POLYGON_NODE_URL_NOT_SET: &str = "POLYGON_NODE_URL not set!";
pub const MUMBAI_NODE_URL_NOT_SET: &str = "MUMBAI_NODE_URL not set!";
pub const ETHERSCAN_KEY_NOT_SET: &str = "ETHERSCAN_KEY not set!";
pub const POLYGONSCAN_KEY_NOT_SET: &str = "POLYGONSCAN_KEY not set!";
