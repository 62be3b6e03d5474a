//! Transaction serializer CLI
//!
//! Command-line interface for producing signed, serialized transactions
//! against a local test chain.

use alloy::primitives::{Address, B256, U256};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use txn_serializer::{
    calldata, Config, Error, Result, SerializeRequest, SigningAccount, TxnSerializer,
    PRIVATE_KEY_ENV,
};

#[derive(Parser)]
#[command(name = "txn-serializer")]
#[command(about = "Build, sign, and serialize test-chain transactions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare, sign, and print a serialized transaction
    Serialize {
        /// Destination address
        #[arg(long)]
        to: Option<String>,

        /// Gas limit
        #[arg(long)]
        gas_limit: Option<u64>,

        /// Recipient inside the encoded transfer call
        #[arg(long)]
        recipient: Option<String>,

        /// Transfer amount in wei
        #[arg(long)]
        amount: Option<String>,

        /// Auxiliary hash appended after the encoded call (32 bytes, hex)
        #[arg(long)]
        aux_hash: Option<String>,

        /// RPC endpoint URL
        #[arg(long)]
        rpc_url: Option<String>,
    },

    /// Print the calldata payload without signing
    Encode {
        /// Recipient inside the encoded transfer call
        #[arg(long)]
        recipient: Option<String>,

        /// Transfer amount in wei
        #[arg(long)]
        amount: Option<String>,

        /// Auxiliary hash appended after the encoded call (32 bytes, hex)
        #[arg(long)]
        aux_hash: Option<String>,
    },

    /// Print the address derived from PRIVATE_KEY
    Address,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Load config
    let config = if let Some(config_path) = cli.config {
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Serialize {
            to,
            gas_limit,
            recipient,
            amount,
            aux_hash,
            rpc_url,
        } => {
            let config = apply_overrides(config, to, gas_limit, recipient, amount, aux_hash, rpc_url)?;
            run_serialize(config).await?;
        }
        Commands::Encode {
            recipient,
            amount,
            aux_hash,
        } => {
            let config = apply_overrides(config, None, None, recipient, amount, aux_hash, None)?;
            run_encode(config)?;
        }
        Commands::Address => {
            run_address()?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config).unwrap());
        }
    }

    Ok(())
}

/// Apply CLI flag overrides on top of the loaded configuration.
#[allow(clippy::too_many_arguments)]
fn apply_overrides(
    mut config: Config,
    to: Option<String>,
    gas_limit: Option<u64>,
    recipient: Option<String>,
    amount: Option<String>,
    aux_hash: Option<String>,
    rpc_url: Option<String>,
) -> Result<Config> {
    if let Some(to) = to {
        config.to = parse_address(&to, "to")?;
    }
    if let Some(gas_limit) = gas_limit {
        config.gas_limit = gas_limit;
    }
    if let Some(recipient) = recipient {
        config.transfer_recipient = parse_address(&recipient, "recipient")?;
    }
    if let Some(amount) = amount {
        config.transfer_amount = U256::from_str(&amount)
            .map_err(|e| Error::InvalidArgument(format!("amount: {}", e)))?;
    }
    if let Some(aux_hash) = aux_hash {
        config.aux_hash = B256::from_str(&aux_hash)
            .map_err(|e| Error::InvalidArgument(format!("aux_hash: {}", e)))?;
    }
    if let Some(rpc_url) = rpc_url {
        config.rpc_url = rpc_url;
    }
    Ok(config)
}

fn parse_address(input: &str, field: &str) -> Result<Address> {
    Address::from_str(input).map_err(|e| Error::InvalidArgument(format!("{}: {}", field, e)))
}

async fn run_serialize(config: Config) -> Result<()> {
    let account = SigningAccount::from_env(PRIVATE_KEY_ENV)?;
    tracing::info!(address = %account.address(), "Loaded wallet from PRIVATE_KEY");

    let serializer = TxnSerializer::new(&config.rpc_url);
    let request = SerializeRequest::from_config(&config);
    let serialized = serializer.serialize(&account, request).await?;

    println!("Serialized transaction: {}", serialized);
    Ok(())
}

fn run_encode(config: Config) -> Result<()> {
    let payload = calldata::transfer_with_aux(
        config.transfer_recipient,
        config.transfer_amount,
        config.aux_hash,
    );

    println!("{}", payload);
    Ok(())
}

fn run_address() -> Result<()> {
    let account = SigningAccount::from_env(PRIVATE_KEY_ENV)?;
    println!("{}", account.address_string());
    Ok(())
}
