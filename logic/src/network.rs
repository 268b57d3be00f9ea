//! Network profiles and the registry that owns them.
//!
//! A [`Network`] can only be created by a [`NetworkRegistry`], so every
//! `Arc<Network>` handed to a key or address is a registered profile. The
//! registry is built once and never mutated; callers pick the default
//! explicitly with [`NetworkRegistry::default_network`].

use std::collections::HashSet;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Network {
    name: String,
    pubkey_address_version: u8,
    wif_version: u8,
    is_default: bool,
}

impl Network {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version byte prefixed to a public key hash in an address.
    pub fn pubkey_address_version(&self) -> u8 {
        self.pubkey_address_version
    }

    /// Version byte prefixed to a private key in wallet import format.
    pub fn wif_version(&self) -> u8 {
        self.wif_version
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

/// One `[[network]]` entry of a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub pubkey_address_version: u8,
    pub wif_version: u8,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: Vec<Arc<Network>>,
    default: usize,
}

impl NetworkRegistry {
    /// livenet (default) and testnet.
    pub fn bitcoin() -> Self {
        let livenet = Network {
            name: "livenet".to_string(),
            pubkey_address_version: 0x00,
            wif_version: 0x80,
            is_default: true,
        };
        let testnet = Network {
            name: "testnet".to_string(),
            pubkey_address_version: 0x6f,
            wif_version: 0xef,
            is_default: false,
        };
        Self {
            networks: vec![Arc::new(livenet), Arc::new(testnet)],
            default: 0,
        }
    }

    /// Builds a registry, rejecting empty sets, duplicate names or version
    /// bytes, and anything other than exactly one default.
    pub fn from_configs(configs: Vec<NetworkConfig>) -> Result<Self, Error> {
        let default = validate_configs(&configs)?;

        let networks: Vec<Arc<Network>> = configs
            .into_iter()
            .map(|config| {
                Arc::new(Network {
                    name: config.name,
                    pubkey_address_version: config.pubkey_address_version,
                    wif_version: config.wif_version,
                    is_default: config.default,
                })
            })
            .collect();

        tracing::debug!(
            count = networks.len(),
            default = %networks[default].name,
            "network registry assembled"
        );

        Ok(Self { networks, default })
    }

    pub fn default_network(&self) -> &Arc<Network> {
        &self.networks[self.default]
    }

    pub fn by_name(&self, name: &str) -> Result<&Arc<Network>, Error> {
        self.networks
            .iter()
            .find(|network| network.name == name)
            .ok_or_else(|| Error::UnknownNetwork(name.to_string()))
    }

    pub fn by_pubkey_version(&self, version: u8) -> Result<&Arc<Network>, Error> {
        self.networks
            .iter()
            .find(|network| network.pubkey_address_version == version)
            .ok_or_else(|| {
                Error::UnknownNetwork(format!("pubkey address version 0x{:02x}", version))
            })
    }

    pub fn by_wif_version(&self, version: u8) -> Result<&Arc<Network>, Error> {
        self.networks
            .iter()
            .find(|network| network.wif_version == version)
            .ok_or_else(|| Error::UnknownNetwork(format!("WIF version 0x{:02x}", version)))
    }

    /// Resolves an optional name, falling back to the default profile.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Arc<Network>, Error> {
        match name {
            Some(name) => self.by_name(name),
            None => Ok(self.default_network()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Network>> {
        self.networks.iter()
    }
}

fn validate_configs(configs: &[NetworkConfig]) -> Result<usize, Error> {
    if configs.is_empty() {
        return Err(Error::InvalidRegistry("no networks configured".to_string()));
    }

    let mut names = HashSet::new();
    let mut pubkey_versions = HashSet::new();
    let mut wif_versions = HashSet::new();
    let mut default = None;

    for (index, config) in configs.iter().enumerate() {
        if !names.insert(config.name.as_str()) {
            return Err(Error::InvalidRegistry(format!("duplicate network name '{}'", config.name)));
        }
        if !pubkey_versions.insert(config.pubkey_address_version) {
            return Err(Error::InvalidRegistry(format!(
                "duplicate pubkey address version 0x{:02x}",
                config.pubkey_address_version
            )));
        }
        if !wif_versions.insert(config.wif_version) {
            return Err(Error::InvalidRegistry(format!(
                "duplicate WIF version 0x{:02x}",
                config.wif_version
            )));
        }
        if config.default {
            if default.is_some() {
                return Err(Error::InvalidRegistry("more than one default network".to_string()));
            }
            default = Some(index);
        }
    }

    default.ok_or_else(|| Error::InvalidRegistry("no default network".to_string()))
}
