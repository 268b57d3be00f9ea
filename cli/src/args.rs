use clap::{Parser, Subcommand};
use common::LogFormat;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "addrkit")]
#[command(about = "Derive and inspect secp256k1 public keys and P2PKH addresses")]
pub struct Cli {
    /// TOML file of [[network]] profiles (defaults to livenet/testnet)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Network profile to use (defaults to the registry default)
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format: text or json
    #[arg(long, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Derive public key and address from a private key (hex or WIF)
    Derive {
        /// 64 hex characters or a WIF string
        key: String,
        /// Use the uncompressed public key form
        #[arg(long)]
        uncompressed: bool,
    },
    /// Decode a public key and show its coordinates and address
    Pubkey {
        /// 33-byte compressed or 65-byte uncompressed key, in hex
        hex: String,
    },
    /// Decode a Base58Check address
    Address {
        address: String,
    },
    /// List registered network profiles
    Networks,
}

impl Cli {
    pub fn validate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(network) = &self.network {
            common::validate_network_name(network)?;
        }

        // A WIF key carries its own network and compression flag
        if let Command::Derive { key, uncompressed } = &self.command {
            if !is_hex_key(key) && *uncompressed {
                return Err("--uncompressed only applies to hex private keys".into());
            }
            if !is_hex_key(key) && self.network.is_some() {
                return Err("--network only applies to hex private keys".into());
            }
        }

        self.command.validate()
    }
}

impl Command {
    pub fn validate(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        match self {
            Command::Derive { key, .. } => {
                if is_hex_key(key) {
                    common::validate_hex_string(key, Some(64))?;
                } else {
                    common::validate_base58_string(key)?;
                }
            }
            Command::Pubkey { hex } => {
                let bytes = common::validate_hex_string(hex, None)?;
                if bytes.len() != 33 && bytes.len() != 65 {
                    let message = format!("public key must be 33 or 65 bytes, got {}", bytes.len());
                    return Err(message.into());
                }
            }
            Command::Address { address } => {
                common::validate_base58_string(address)?;
            }
            Command::Networks => {}
        }
        Ok(())
    }

    pub fn description(&self) -> String {
        match self {
            Command::Derive { uncompressed, .. } => {
                let form = if *uncompressed { "uncompressed" } else { "compressed" };
                format!("Deriving {} public key from private key", form)
            }
            Command::Pubkey { hex } => format!("Decoding public key '{}'", hex),
            Command::Address { address } => format!("Decoding address '{}'", address),
            Command::Networks => "Listing network profiles".to_string(),
        }
    }
}

/// Private keys are 64 hex characters; anything else is read as WIF.
pub fn is_hex_key(key: &str) -> bool {
    key.len() == 64
}
