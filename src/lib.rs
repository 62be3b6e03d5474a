//! Transaction serializer
//!
//! Developer utility for a local test chain: builds ERC20 transfer calldata
//! with an auxiliary hash appended, has the endpoint fill nonce, fees, and
//! chain id, signs with a locally held key, and prints the serialized signed
//! transaction.
//!
//! # Security Model
//!
//! - Private keys enter through the `PRIVATE_KEY` environment variable only
//! - Keys never appear in config files, logs, or `Debug` output
//! - The signed transaction is printed, never broadcast

pub mod calldata;
pub mod config;
pub mod pipeline;
pub mod wallet;

mod error;

// Re-export commonly used types
pub use config::{Config, PRIVATE_KEY_ENV};
pub use error::{Error, Result};
pub use pipeline::{SerializeRequest, TxnSerializer};
pub use wallet::SigningAccount;
