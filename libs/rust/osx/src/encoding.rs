use alloy::{
    primitives::{keccak256, Address, B256},
    sol_types::SolValue,
};
use anyhow::{anyhow, bail, Result};

/// Digit precision used for voting ratios on-chain (RATIO_BASE = 10^6).
pub const RATIO_DIGITS: u32 = 6;

pub const ROOT_PERMISSION: &str = "ROOT_PERMISSION";

/// Encodes a 0-1 ratio within the given digit precision for storage on a
/// smart contract.
pub fn encode_ratio(ratio: f64, digits: u32) -> Result<u64> {
    if !(0.0..=1.0).contains(&ratio) {
        bail!("The ratio value should range between 0 and 1");
    }
    if !(1..=15).contains(&digits) {
        bail!("The number of digits should range between 1 and 15");
    }
    Ok((ratio * 10f64.powi(digits as i32)).round() as u64)
}

pub fn strip_0x(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }
    let stripped = strip_0x(value);
    if stripped.len() % 2 != 0 {
        bail!("The hex string has an odd length");
    }
    hex::decode(stripped).map_err(|_| anyhow!("Invalid hex string"))
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// keccak256 of the ABI encoding of the helper address array, as the setup
/// processor computes it on-chain.
pub fn hash_helpers(helpers: &[Address]) -> B256 {
    keccak256(helpers.to_vec().abi_encode())
}

/// Permission identifiers are the keccak256 hash of the permission name.
pub fn permission_id(name: &str) -> B256 {
    keccak256(name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_ratio_scales_and_rounds() {
        assert_eq!(encode_ratio(0.5, 6).unwrap(), 500_000);
        assert_eq!(encode_ratio(0.25, 6).unwrap(), 250_000);
        assert_eq!(encode_ratio(0.0, 1).unwrap(), 0);
        assert_eq!(encode_ratio(1.0, 15).unwrap(), 1_000_000_000_000_000);
        assert_eq!(encode_ratio(0.123456789, 4).unwrap(), 1235);
    }

    #[test]
    fn encode_ratio_rejects_out_of_range_inputs() {
        assert!(encode_ratio(-0.1, 6).is_err());
        assert!(encode_ratio(1.1, 6).is_err());
        assert!(encode_ratio(0.5, 0).is_err());
        assert!(encode_ratio(0.5, 16).is_err());
    }

    #[test]
    fn hex_to_bytes_rejects_malformed_input() {
        assert!(hex_to_bytes("0x123").is_err());
        assert!(hex_to_bytes("0xzz").is_err());
        assert!(hex_to_bytes("not hex").is_err());
    }

    #[test]
    fn hex_to_bytes_accepts_empty_and_unprefixed_input() {
        assert!(hex_to_bytes("").unwrap().is_empty());
        assert_eq!(hex_to_bytes("00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(hex_to_bytes("0x00ff").unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn permission_id_matches_known_hash() {
        // keccak256("ROOT_PERMISSION"), as hardcoded in the OSx DAO contract
        assert_eq!(
            bytes_to_hex(permission_id(ROOT_PERMISSION).as_slice()),
            "0x815fe80e4b37c8582a3b773d1d7071f983eacfd56b5965db654f3087c25ada33"
        );
    }

    proptest! {
        #[test]
        fn hex_round_trips(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let encoded = bytes_to_hex(&bytes);
            prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes);
        }

        #[test]
        fn encode_ratio_valid_inputs_round(ratio in 0.0f64..=1.0, digits in 1u32..=15) {
            let encoded = encode_ratio(ratio, digits).unwrap();
            let expected = (ratio * 10f64.powi(digits as i32)).round() as u64;
            prop_assert_eq!(encoded, expected);
            prop_assert!(encoded <= 10u64.pow(digits));
        }
    }
}
