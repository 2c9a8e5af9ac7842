//! Voting configuration and plugin install-data encoding.
//!
//! The setup contracts decode their installation parameters with
//! `abi.decode`, so the encodings here must match the setup ABIs exactly:
//! admin takes a single address, token voting takes
//! `(VotingSettings, TokenSettings, MintSettings)`, lens voting takes
//! `(VotingSettings, address followNft)`.

use crate::{
    bindings,
    encoding::{encode_ratio, RATIO_DIGITS},
};
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use anyhow::{anyhow, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VotingMode {
    #[default]
    Standard,
    EarlyExecution,
    VoteReplacement,
}

impl VotingMode {
    pub fn to_contract(self) -> u8 {
        match self {
            VotingMode::Standard => 0,
            VotingMode::EarlyExecution => 1,
            VotingMode::VoteReplacement => 2,
        }
    }

    pub fn from_contract(code: u8) -> Result<Self> {
        match code {
            0 => Ok(VotingMode::Standard),
            1 => Ok(VotingMode::EarlyExecution),
            2 => Ok(VotingMode::VoteReplacement),
            _ => Err(anyhow!("Invalid voting mode: {}", code)),
        }
    }
}

/// Vote cast by the proposal creator at creation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoteOption {
    #[default]
    None,
    Abstain,
    Yes,
    No,
}

impl VoteOption {
    pub fn to_contract(self) -> u8 {
        match self {
            VoteOption::None => 0,
            VoteOption::Abstain => 1,
            VoteOption::Yes => 2,
            VoteOption::No => 3,
        }
    }
}

/// Majority-voting settings with ratios as floats in [0, 1].
#[derive(Clone, Debug)]
pub struct VotingSettings {
    pub voting_mode: VotingMode,
    pub support_threshold: f64,
    pub min_participation: f64,
    /// Seconds; the contracts enforce a 3600s minimum.
    pub min_duration: u64,
    pub min_proposer_voting_power: U256,
}

impl VotingSettings {
    pub fn to_contract(&self) -> Result<bindings::VotingSettings> {
        Ok(bindings::VotingSettings {
            votingMode: self.voting_mode.to_contract(),
            supportThreshold: encode_ratio(self.support_threshold, RATIO_DIGITS)?,
            minParticipation: encode_ratio(self.min_participation, RATIO_DIGITS)?,
            minDuration: self.min_duration,
            minProposerVotingPower: self.min_proposer_voting_power,
        })
    }
}

/// Governance token source for a token-voting installation.
#[derive(Clone, Debug)]
pub enum TokenVotingToken {
    /// Mint a fresh token with the given initial balances.
    New {
        name: String,
        symbol: String,
        balances: Vec<(Address, U256)>,
    },
    /// Wrap an existing token.
    Existing(Address),
}

/// Installation parameters for the token-voting plugin.
#[derive(Clone, Debug)]
pub struct TokenVotingInstall {
    pub voting_settings: VotingSettings,
    pub token: TokenVotingToken,
}

impl TokenVotingInstall {
    pub fn encode(&self) -> Result<Bytes> {
        let (token_settings, mint_settings) = match &self.token {
            TokenVotingToken::New {
                name,
                symbol,
                balances,
            } => (
                bindings::TokenSettings {
                    addr: Address::ZERO,
                    name: name.clone(),
                    symbol: symbol.clone(),
                },
                bindings::MintSettings {
                    receivers: balances.iter().map(|(receiver, _)| *receiver).collect(),
                    amounts: balances.iter().map(|(_, amount)| *amount).collect(),
                },
            ),
            TokenVotingToken::Existing(addr) => (
                bindings::TokenSettings {
                    addr: *addr,
                    name: String::new(),
                    symbol: String::new(),
                },
                bindings::MintSettings {
                    receivers: vec![],
                    amounts: vec![],
                },
            ),
        };

        let encoded =
            (self.voting_settings.to_contract()?, token_settings, mint_settings).abi_encode_params();
        Ok(encoded.into())
    }
}

/// Installation parameters for the lens-voting plugin: majority-voting
/// settings plus the Lens follow NFT acting as the voting token.
#[derive(Clone, Debug)]
pub struct LensVotingInstall {
    pub voting_settings: VotingSettings,
    pub follow_nft: Address,
}

impl LensVotingInstall {
    pub fn encode(&self) -> Result<Bytes> {
        let encoded = (self.voting_settings.to_contract()?, self.follow_nft).abi_encode_params();
        Ok(encoded.into())
    }
}

/// The admin setup decodes a single address.
pub fn encode_admin_install(admin: Address) -> Bytes {
    admin.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings() -> VotingSettings {
        VotingSettings {
            voting_mode: VotingMode::EarlyExecution,
            support_threshold: 0.5,
            min_participation: 0.25,
            min_duration: 60 * 60 * 24 * 2,
            min_proposer_voting_power: U256::from(5000u64),
        }
    }

    #[test]
    fn voting_mode_round_trips() {
        for mode in [
            VotingMode::Standard,
            VotingMode::EarlyExecution,
            VotingMode::VoteReplacement,
        ] {
            assert_eq!(VotingMode::from_contract(mode.to_contract()).unwrap(), mode);
        }
    }

    #[test]
    fn voting_mode_rejects_unknown_codes() {
        assert!(VotingMode::from_contract(3).is_err());
        assert!(VotingMode::from_contract(255).is_err());
    }

    proptest! {
        #[test]
        fn voting_mode_codes_outside_range_always_error(code in 3u8..) {
            prop_assert!(VotingMode::from_contract(code).is_err());
        }
    }

    #[test]
    fn settings_scale_ratios_to_six_digits() {
        let contract = settings().to_contract().unwrap();
        assert_eq!(contract.votingMode, 1);
        assert_eq!(contract.supportThreshold, 500_000);
        assert_eq!(contract.minParticipation, 250_000);
        assert_eq!(contract.minDuration, 172_800);
        assert_eq!(contract.minProposerVotingPower, U256::from(5000u64));
    }

    #[test]
    fn settings_reject_out_of_range_thresholds() {
        let mut bad = settings();
        bad.support_threshold = 1.5;
        assert!(bad.to_contract().is_err());
    }

    #[test]
    fn admin_install_data_is_one_padded_word() {
        let admin = Address::repeat_byte(0x11);
        let data = encode_admin_install(admin);
        assert_eq!(data.len(), 32);
        assert_eq!(&data[12..], admin.as_slice());
    }

    #[test]
    fn new_token_install_zeroes_the_token_address() {
        let install = TokenVotingInstall {
            voting_settings: settings(),
            token: TokenVotingToken::New {
                name: "Token".into(),
                symbol: "TOK".into(),
                balances: vec![(Address::repeat_byte(0x22), U256::from(10u64))],
            },
        };
        let data = install.encode().unwrap();
        // VotingSettings is a static 5-word head; the token tuple follows
        // through an offset and starts with the zero address.
        assert!(!data.is_empty());
        assert_eq!(data.len() % 32, 0);
    }

    #[test]
    fn existing_token_install_encodes_empty_mint_settings() {
        let install = TokenVotingInstall {
            voting_settings: settings(),
            token: TokenVotingToken::Existing(Address::repeat_byte(0x33)),
        };
        assert!(install.encode().is_ok());
    }

    #[test]
    fn lens_install_is_statically_encoded() {
        let install = LensVotingInstall {
            voting_settings: settings(),
            follow_nft: Address::repeat_byte(0x44),
        };
        let data = install.encode().unwrap();
        // five settings words plus the follow NFT word
        assert_eq!(data.len(), 6 * 32);
    }
}
