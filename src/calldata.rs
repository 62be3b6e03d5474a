//! Calldata construction
//!
//! Builds the payload for the token-transfer flow: a standard ERC20
//! `transfer(address,uint256)` call with a 32-byte auxiliary hash appended
//! verbatim after the encoded arguments. The consuming contract peels the
//! trailing hash off itself; nothing here re-encodes it.

use alloy::primitives::{address, b256, Address, Bytes, B256, U256};

/// ERC20 `transfer(address,uint256)` selector.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Well-known values from the local test flow
pub mod defaults {
    use super::*;

    /// Token recipient inside the encoded transfer.
    pub const TRANSFER_RECIPIENT: Address = address!("c7183455a4c133ae270771860664b6b7ec320bb1");

    /// Transfer amount in wei (6 * 10^18).
    pub const TRANSFER_AMOUNT: u128 = 6_000_000_000_000_000_000;

    /// Auxiliary hash for the non-validated flow.
    pub const AUX_HASH: B256 =
        b256!("cdc98f27126eab75b8aadb26e9324d74b2a10b566b345109543d1c9cefd14a72");

    /// Auxiliary hash for the validated flow (userOps root).
    pub const AUX_HASH_USEROPS_ROOT: B256 =
        b256!("1d69c064e2bd749cfe331b748be1dd5324cbf4e1839dda346cbb741a3e3169d1");
}

/// Encode an ERC20 `transfer(recipient, amount)` call.
///
/// Selector, then the recipient left-padded to 32 bytes, then the amount as
/// a 32-byte big-endian word. Always 68 bytes.
pub fn encode_transfer(recipient: Address, amount: U256) -> Bytes {
    let mut calldata = Vec::with_capacity(68);
    calldata.extend_from_slice(&TRANSFER_SELECTOR);
    calldata.extend_from_slice(&[0u8; 12]); // pad address to 32 bytes
    calldata.extend_from_slice(recipient.as_slice());
    calldata.extend_from_slice(&amount.to_be_bytes::<32>());
    Bytes::from(calldata)
}

/// Append the auxiliary hash after an encoded call, bytes preserved exactly.
pub fn append_aux_hash(call: &[u8], aux_hash: B256) -> Bytes {
    let mut payload = Vec::with_capacity(call.len() + 32);
    payload.extend_from_slice(call);
    payload.extend_from_slice(aux_hash.as_slice());
    Bytes::from(payload)
}

/// Build the full payload: encoded transfer followed by the auxiliary hash.
pub fn transfer_with_aux(recipient: Address, amount: U256, aux_hash: B256) -> Bytes {
    let call = encode_transfer(recipient, amount);
    append_aux_hash(&call, aux_hash)
}
