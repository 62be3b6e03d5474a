//! RPC endpoint configuration
//!
//! The tool targets a single local test chain. Resolution order:
//! 1. `RPC_URL` env var
//! 2. The local default endpoint
//!
//! ```bash
//! # Point at a non-default local node
//! export RPC_URL="http://localhost:9545"
//! ```

/// Default endpoint of a local anvil/hardhat node.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Environment variable names
mod env_vars {
    pub const RPC_URL: &str = "RPC_URL";
}

/// Resolve the RPC URL from the environment, falling back to the local
/// default. Chain id, nonce, and fee parameters come from the endpoint
/// itself, so the URL is the only piece of RPC configuration.
pub fn rpc_url_from_env() -> String {
    match std::env::var(env_vars::RPC_URL) {
        Ok(url) => {
            tracing::debug!(url = %url, "Using RPC_URL from environment");
            url
        }
        Err(_) => DEFAULT_RPC_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_default() {
        std::env::remove_var("RPC_URL");
        assert_eq!(rpc_url_from_env(), DEFAULT_RPC_URL);
    }

    #[test]
    fn default_is_loopback() {
        assert!(DEFAULT_RPC_URL.starts_with("http://localhost"));
    }
}
