//! Network configuration files.
//!
//! ```toml
//! [[network]]
//! name = "livenet"
//! pubkey_address_version = 0
//! wif_version = 128
//! default = true
//! ```

use std::path::Path;

use logic::{NetworkConfig, NetworkRegistry};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse network config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Registry(#[from] logic::Error),
}

#[derive(Debug, Deserialize)]
struct NetworksFile {
    #[serde(rename = "network", default)]
    networks: Vec<NetworkConfig>,
}

pub fn registry_from_toml(text: &str) -> Result<NetworkRegistry, ConfigError> {
    let file: NetworksFile = toml::from_str(text)?;
    Ok(NetworkRegistry::from_configs(file.networks)?)
}

/// Without a path the built-in livenet/testnet registry is used.
pub fn load_registry(path: Option<&Path>) -> Result<NetworkRegistry, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("using built-in bitcoin networks");
        return Ok(NetworkRegistry::bitcoin());
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loading network config");
    registry_from_toml(&text)
}
