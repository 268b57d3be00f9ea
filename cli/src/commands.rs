use crate::args::{Command, is_hex_key};
use logic::{Address, Network, NetworkRegistry, PrivateKey, PublicKey};
use std::error::Error;
use std::sync::Arc;

/// Runs one command and returns the lines to print.
pub fn run(
    command: &Command,
    registry: &NetworkRegistry,
    network: &Arc<Network>,
) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    match command {
        Command::Derive { key, uncompressed } => derive(key, *uncompressed, registry, network),
        Command::Pubkey { hex } => pubkey(hex, network),
        Command::Address { address } => address_info(address, registry),
        Command::Networks => Ok(networks(registry)),
    }
}

fn derive(
    key: &str,
    uncompressed: bool,
    registry: &NetworkRegistry,
    network: &Arc<Network>,
) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    // WIF carries its own network and compression flag
    let private_key = if is_hex_key(key) {
        let parsed = PrivateKey::from_hex(key, network)?;
        PrivateKey::new(&parsed.to_bytes(), !uncompressed, network)?
    } else {
        PrivateKey::from_wif(key, registry)?
    };

    let public_key = private_key.to_public_key();
    tracing::info!(
        network = public_key.network().name(),
        compressed = public_key.is_compressed(),
        "derived key"
    );

    Ok(vec![
        format!("network: {}", public_key.network().name()),
        format!("compressed: {}", public_key.is_compressed()),
        format!("public_key: {}", public_key),
        format!("address: {}", public_key.to_address()),
        format!("wif: {}", private_key.to_wif()),
    ])
}

fn pubkey(hex: &str, network: &Arc<Network>) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    let public_key = PublicKey::from_hex(hex, network)?;
    let (x, y) = public_key.pair();

    Ok(vec![
        format!("network: {}", network.name()),
        format!("compressed: {}", public_key.is_compressed()),
        format!("x: {}", hex::encode(x)),
        format!("y: {}", hex::encode(y)),
        format!("address: {}", public_key.to_address()),
    ])
}

fn address_info(
    text: &str,
    registry: &NetworkRegistry,
) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
    let address = Address::from_string(text, registry)?;

    Ok(vec![
        format!("network: {}", address.network().name()),
        format!("version: 0x{:02x}", address.network().pubkey_address_version()),
        format!("hash160: {}", hex::encode(address.hash())),
    ])
}

fn networks(registry: &NetworkRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|network| {
            format!(
                "{}{} pubkey=0x{:02x} wif=0x{:02x}",
                network.name(),
                if network.is_default() { " (default)" } else { "" },
                network.pubkey_address_version(),
                network.wif_version(),
            )
        })
        .collect()
}
