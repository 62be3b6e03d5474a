//! Payload-and-sign pipeline
//!
//! One linear path: bind a provider to the local RPC endpoint, hand it a
//! transaction request carrying destination, gas limit, zero value, and the
//! calldata payload, let the endpoint-backed fillers supply nonce, fees, and
//! chain id, sign with the account's wallet, and return the EIP-2718 encoded
//! bytes as hex. No retries, no reconnects; the first failure is final.

use crate::calldata;
use crate::config::Config;
use crate::wallet::SigningAccount;
use crate::{Error, Result};
use alloy::eips::eip2718::Encodable2718;
use alloy::hex;
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{ProviderBuilder, SendableTx};
use alloy::rpc::types::TransactionRequest;

/// Fixed inputs of one serialization run
///
/// Nonce, fee parameters, and chain id are deliberately absent: the endpoint
/// fills those.
#[derive(Debug, Clone)]
pub struct SerializeRequest {
    pub to: Address,
    pub gas_limit: u64,
    pub value: U256,
    pub data: Bytes,
}

impl SerializeRequest {
    /// Build the request from configuration: transfer calldata with the
    /// auxiliary hash appended, zero value.
    pub fn from_config(config: &Config) -> Self {
        Self {
            to: config.to,
            gas_limit: config.gas_limit,
            value: U256::ZERO,
            data: calldata::transfer_with_aux(
                config.transfer_recipient,
                config.transfer_amount,
                config.aux_hash,
            ),
        }
    }
}

/// Serializes signed transactions against a single RPC endpoint
pub struct TxnSerializer {
    /// RPC URL of the local test chain
    rpc_url: String,
}

impl TxnSerializer {
    /// Create a serializer bound to one endpoint.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
        }
    }

    /// Prepare, sign, and serialize a transaction.
    ///
    /// Returns the 0x-prefixed hex encoding of the signed transaction, ready
    /// for broadcast. Parameter retrieval failures surface before any
    /// signing is attempted.
    pub async fn serialize(
        &self,
        account: &SigningAccount,
        request: SerializeRequest,
    ) -> Result<String> {
        let url: url::Url = self
            .rpc_url
            .parse()
            .map_err(|e| Error::Rpc(format!("Invalid RPC URL {}: {}", self.rpc_url, e)))?;

        let provider = ProviderBuilder::new()
            .wallet(account.wallet().clone())
            .connect_http(url);

        tracing::info!(
            from = %account.address(),
            to = %request.to,
            gas_limit = request.gas_limit,
            data_len = request.data.len(),
            "Preparing transaction"
        );

        let tx = TransactionRequest::default()
            .from(account.address())
            .to(request.to)
            .gas_limit(request.gas_limit)
            .value(request.value)
            .input(request.data.into());

        // Nonce, fees, and chain id come from the endpoint; signing happens
        // in the wallet filler once those are in place.
        let sendable = provider
            .fill(tx)
            .await
            .map_err(|e| Error::Rpc(format!("Failed to prepare transaction: {}", e)))?;

        let envelope = match sendable {
            SendableTx::Envelope(envelope) => envelope,
            SendableTx::Builder(_) => {
                return Err(Error::Signing(
                    "provider returned an unsigned transaction".to_string(),
                ));
            }
        };

        let raw = envelope.encoded_2718();
        tracing::info!(bytes = raw.len(), "Transaction signed and serialized");

        Ok(format!("0x{}", hex::encode(raw)))
    }
}
