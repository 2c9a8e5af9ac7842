//! Receipt scanning. Every flow that needs an address minted on-chain learns
//! it from a single expected event in the transaction receipt; a missing
//! event aborts the run.

use alloy::{
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};
use anyhow::{Context, Result};

/// Finds and decodes the single expected event in a receipt's logs.
pub fn find_event<E: SolEvent>(receipt: &TransactionReceipt) -> Result<E> {
    find_event_in_logs(receipt.inner.logs())
}

pub fn find_event_in_logs<E: SolEvent>(logs: &[Log]) -> Result<E> {
    logs.iter()
        .find_map(|log| log.log_decode::<E>().ok())
        .map(|log| log.inner.data)
        .with_context(|| format!("No logs found for event {}", E::SIGNATURE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::DAORegistry;
    use alloy::primitives::Address;

    fn log_for(event: &DAORegistry::DAORegistered) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: Address::ZERO,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn finds_the_expected_event() {
        let event = DAORegistry::DAORegistered {
            dao: Address::repeat_byte(0x11),
            creator: Address::repeat_byte(0x22),
            subdomain: "daobox".to_string(),
        };

        let found: DAORegistry::DAORegistered = find_event_in_logs(&[log_for(&event)]).unwrap();
        assert_eq!(found.dao, event.dao);
        assert_eq!(found.subdomain, "daobox");
    }

    #[test]
    fn errors_when_the_event_is_absent() {
        let result: Result<DAORegistry::DAORegistered> = find_event_in_logs(&[]);
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("DAORegistered"));
    }
}
