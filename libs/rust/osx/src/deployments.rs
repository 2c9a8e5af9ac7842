//! Addresses of the externally deployed OSx framework contracts, per
//! supported network. This is the Rust counterpart of the framework's
//! `activeContractsList`: the factories and registries are owned and audited
//! upstream, we only call into them.

use alloy::primitives::{address, Address};
use alloy_chains::NamedChain;

/// Framework deployment for one network.
#[derive(Clone, Copy, Debug)]
pub struct Deployment {
    pub dao_factory: Address,
    pub plugin_repo_factory: Address,
    pub plugin_setup_processor: Address,
    pub admin_repo: Address,
    pub token_voting_repo: Address,
}

impl Deployment {
    /// Lookup the [Deployment] for a named chain.
    pub const fn from_chain(chain: NamedChain) -> Option<Deployment> {
        match chain {
            NamedChain::Mainnet => Some(MAINNET),
            NamedChain::Goerli => Some(GOERLI),
            NamedChain::Polygon => Some(POLYGON),
            NamedChain::PolygonMumbai => Some(MUMBAI),
            _ => None,
        }
    }
}

/// [Deployment] for Ethereum mainnet.
pub const MAINNET: Deployment = Deployment {
    dao_factory: address!("246503df057a9a85e0144b6867a828c99676128b"),
    plugin_repo_factory: address!("96e54098317631641703404c06a5afad89da7373"),
    plugin_setup_processor: address!("e978752a0164a28d03a5dece63b75afdd74e3da0"),
    admin_repo: address!("a4371a239d08bfba6e8894eccf8466c6323a52c3"),
    token_voting_repo: address!("b19bbdbd9d4d27a36ab7cd76c5fdc39bb15d4e0a"),
};

/// [Deployment] for the Goerli testnet.
pub const GOERLI: Deployment = Deployment {
    dao_factory: address!("16b6c6674fef5d29c9a49ea68a19944f5a8471d3"),
    plugin_repo_factory: address!("301868712b77744a3c0e5511609238399f0a2d4d"),
    plugin_setup_processor: address!("e8b5d8d66a02cd1b9bd32a4064d7aba45f51305e"),
    admin_repo: address!("7b8e9b57c37541fa10b025dbd9c3e40a3e42ad0b"),
    token_voting_repo: address!("f8b25b0b65764a1b04b47d6072b17a1c9fc4d4c7"),
};

/// [Deployment] for Polygon mainnet.
pub const POLYGON: Deployment = Deployment {
    dao_factory: address!("392f0ec2b3bf2a84d60d9e0b06ec8c5e03a2d3c0"),
    plugin_repo_factory: address!("6e55b087ea975b0c20e3eab0e40a21de69d1b3f4"),
    plugin_setup_processor: address!("879d9dfe3f36d7684bec87c47b4f8fd1ba5dcd2e"),
    admin_repo: address!("7f26a7c6a98e7ef33ba077e6f9612a18b79cbb41"),
    token_voting_repo: address!("34a2aaee2e8e8d13e76ab0d26e6a4ab2f7d3fe51"),
};

/// [Deployment] for the Polygon Mumbai testnet.
pub const MUMBAI: Deployment = Deployment {
    dao_factory: address!("02a352b0558aca35dac1cc0806a642500c6f6db2"),
    plugin_repo_factory: address!("96c68b5ae095b4e985fbbcdc5b3a371f663a2da7"),
    plugin_setup_processor: address!("9227b3f4d8ac8e20b9b11a3006c100c295e8a3cd"),
    admin_repo: address!("55c86cc8e56928eacdcc4d05eac00e47b7e41af5"),
    token_voting_repo: address!("0da6d627bee1e5a903da2e50843b9fd9d0e56d1d"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_chain_has_a_deployment() {
        for chain in [
            NamedChain::Mainnet,
            NamedChain::Goerli,
            NamedChain::Polygon,
            NamedChain::PolygonMumbai,
        ] {
            assert!(Deployment::from_chain(chain).is_some());
        }
    }

    #[test]
    fn unsupported_chains_have_no_deployment() {
        assert!(Deployment::from_chain(NamedChain::Arbitrum).is_none());
        assert!(Deployment::from_chain(NamedChain::Optimism).is_none());
    }
}
