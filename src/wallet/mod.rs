//! Wallet module
//!
//! Key derivation and the signing handle used by the pipeline.

mod signer;

pub use signer::SigningAccount;
