//! Signing account
//!
//! SECURITY: This is the ONLY place where private keys exist.
//! - Keys are held in alloy's PrivateKeySigner
//! - Keys are never serialized or logged
//! - Signing happens through the EthereumWallet handle only

use crate::{Error, Result};
use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

/// Account derived from a fixed private key
///
/// Derivation is deterministic: the same key always yields the same address.
pub struct SigningAccount {
    /// Public address (safe to expose)
    address: Address,
    /// Ethereum wallet for alloy provider integration
    wallet: EthereumWallet,
}

impl SigningAccount {
    /// Create an account from an environment variable holding a hex key.
    pub fn from_env(var_name: &str) -> Result<Self> {
        let key_hex = std::env::var(var_name).map_err(|_| {
            Error::Wallet(format!(
                "Environment variable {} not set. Required for signing.",
                var_name
            ))
        })?;

        Self::from_hex(&key_hex)
    }

    /// Create an account from a hex-encoded 32-byte private key.
    ///
    /// Accepts an optional `0x` prefix. Fails on wrong length or non-hex
    /// input without touching the network.
    pub fn from_hex(key_hex: &str) -> Result<Self> {
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Error::Wallet(format!("Invalid private key: {}", e)))?;

        let address = signer.address();
        let wallet = EthereumWallet::from(signer);

        Ok(Self { address, wallet })
    }

    /// Get the public address (safe to share)
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the address as a 0x-prefixed hex string
    pub fn address_string(&self) -> String {
        format!("{:?}", self.address)
    }

    /// Signing handle for alloy providers.
    ///
    /// EthereumWallet only exposes signing operations, not key material.
    pub fn wallet(&self) -> &EthereumWallet {
        &self.wallet
    }
}

// Implement Debug manually to avoid exposing the signer
impl std::fmt::Debug for SigningAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningAccount")
            .field("address", &self.address)
            .field("signer", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test-only key from the local flow (DO NOT use outside test chains!)
    const TEST_KEY: &str = "0x46a31f1f917570aa8a60b2339f1a0469cbce2feb53c705746446981548845b3b";

    #[test]
    fn derivation_is_deterministic() {
        let a = SigningAccount::from_hex(TEST_KEY).unwrap();
        let b = SigningAccount::from_hex(TEST_KEY).unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn prefix_is_optional() {
        let with = SigningAccount::from_hex(TEST_KEY).unwrap();
        let without = SigningAccount::from_hex(TEST_KEY.strip_prefix("0x").unwrap()).unwrap();
        assert_eq!(with.address(), without.address());
    }

    #[test]
    fn malformed_keys_are_rejected() {
        // wrong length
        assert!(SigningAccount::from_hex("0xdeadbeef").is_err());
        // non-hex
        assert!(SigningAccount::from_hex(
            "0xzz31f1f917570aa8a60b2339f1a0469cbce2feb53c705746446981548845b3b"
        )
        .is_err());
        // empty
        assert!(SigningAccount::from_hex("").is_err());
    }

    #[test]
    fn missing_env_var_is_an_error() {
        let err = SigningAccount::from_env("TXN_SERIALIZER_NO_SUCH_VAR").unwrap_err();
        assert!(format!("{err}").contains("TXN_SERIALIZER_NO_SUCH_VAR"));
    }

    #[test]
    fn debug_redacts_key() {
        let account = SigningAccount::from_hex(TEST_KEY).unwrap();
        let debug_str = format!("{:?}", account);

        assert!(!debug_str.contains("46a31f1f"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
