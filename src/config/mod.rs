//! Configuration for the transaction serializer
//!
//! Every literal of the original one-shot flow is externalized here with the
//! original value as default, so the stock binary reproduces the known-good
//! transaction against a fresh local node.

pub mod rpc;

use crate::calldata::defaults;
use alloy::primitives::{address, Address, B256, U256};
use serde::{Deserialize, Serialize};

pub use rpc::DEFAULT_RPC_URL;

/// Private key environment variable name
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint of the local test chain
    pub rpc_url: String,
    /// Transaction destination (the token contract in the test flow)
    pub to: Address,
    /// Fixed gas limit for the transaction
    pub gas_limit: u64,
    /// Recipient inside the encoded transfer call
    pub transfer_recipient: Address,
    /// Transfer amount in wei
    pub transfer_amount: U256,
    /// Auxiliary hash appended after the encoded call
    pub aux_hash: B256,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: rpc::rpc_url_from_env(),
            to: address!("70997970c51812dc3a010c7d01b50e0d17dc79c8"),
            gas_limit: 50_000,
            transfer_recipient: defaults::TRANSFER_RECIPIENT,
            transfer_amount: U256::from(defaults::TRANSFER_AMOUNT),
            aux_hash: defaults::AUX_HASH,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_flow() {
        std::env::remove_var("RPC_URL");
        let config = Config::default();

        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(
            config.to,
            address!("70997970c51812dc3a010c7d01b50e0d17dc79c8")
        );
        assert_eq!(config.gas_limit, 50_000);
        assert_eq!(
            config.transfer_amount,
            U256::from(6_000_000_000_000_000_000u128)
        );
        assert_eq!(config.aux_hash, defaults::AUX_HASH);
    }

    #[test]
    fn config_round_trips_through_file() {
        let mut config = Config::default();
        config.gas_limit = 75_000;
        config.aux_hash = defaults::AUX_HASH_USEROPS_ROOT;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.gas_limit, 75_000);
        assert_eq!(loaded.aux_hash, defaults::AUX_HASH_USEROPS_ROOT);
        assert_eq!(loaded.to, config.to);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
