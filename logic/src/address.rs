//! Pay-to-public-key-hash addresses.
//!
//! An address is `hash160(public key bytes)` tagged with the network's
//! version byte and rendered as Base58Check:
//!
//! ```text
//! base58( version(1) ++ hash160(20) ++ checksum(4) )
//! ```

use std::fmt;
use std::sync::Arc;

use crate::base58;
use crate::error::Error;
use crate::network::{Network, NetworkRegistry};
use crate::public_key::PublicKey;
use crate::ripemd160;

pub const HASH_LEN: usize = 20;
pub const PAYLOAD_LEN: usize = 1 + HASH_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    hash: [u8; HASH_LEN],
    network: Arc<Network>,
}

impl Address {
    pub fn new(hash: [u8; HASH_LEN], network: &Arc<Network>) -> Self {
        Self {
            hash,
            network: Arc::clone(network),
        }
    }

    /// Hashes the key's own encoding, so the compressed and uncompressed
    /// forms of one point give different addresses.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let hash = ripemd160::hash160(&public_key.to_bytes());
        Self::new(hash, public_key.network())
    }

    /// Parses Base58Check text and resolves the network from its version byte.
    pub fn from_string(text: &str, registry: &NetworkRegistry) -> Result<Self, Error> {
        let payload = base58::base58check_decode_array::<PAYLOAD_LEN>(text).map_err(|e| {
            tracing::debug!(address = text, error = %e, "rejected address");
            Error::InvalidAddressEncoding(e)
        })?;

        let network = registry.by_pubkey_version(payload[0])?;
        let mut hash = [0u8; HASH_LEN];
        hash.copy_from_slice(&payload[1..]);

        Ok(Self::new(hash, network))
    }

    /// version byte ++ hash, before the checksum is appended.
    pub fn to_payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = self.network.pubkey_address_version();
        payload[1..].copy_from_slice(&self.hash);
        payload
    }

    pub fn hash(&self) -> &[u8; HASH_LEN] {
        &self.hash
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base58::base58check_encode(&self.to_payload()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::EncodingError;

    const COMPRESSED_HEX: &str =
        "03b805174bd496b275e711d5a9f1bcbaa4bba1a77176dbdb5fdd8b769da62a36a9";
    const UNCOMPRESSED_HEX: &str = concat!(
        "04b805174bd496b275e711d5a9f1bcbaa4bba1a77176dbdb5fdd8b769da62a36a9",
        "c3dfa7c8ccb509f9a66efd6d8d1db6b25aa7c100476154b6303d76c28eda099b"
    );

    fn address_for(hex: &str, network: &str) -> String {
        let registry = NetworkRegistry::bitcoin();
        let network = registry.by_name(network).unwrap();
        PublicKey::from_hex(hex, network).unwrap().to_address().to_string()
    }

    #[test]
    fn should_derive_livenet_addresses() {
        assert_eq!(address_for(COMPRESSED_HEX, "livenet"), "1N8FRuC7P1ZtLfkjrvGrCTGkZXuLk4p8rE");
        assert_eq!(address_for(UNCOMPRESSED_HEX, "livenet"), "1MGu43MAwpDnKb4d3xmNZvupLwk6iaaQay");
    }

    #[test]
    fn should_derive_testnet_addresses() {
        assert_eq!(address_for(COMPRESSED_HEX, "testnet"), "n2eCixH6C3197nEMaVFE2NV5RXW3cazW4Q");
        assert_eq!(address_for(UNCOMPRESSED_HEX, "testnet"), "n1nrM6S9kqf36hYEmXjkPr89CwLobCH2nR");
    }

    #[test]
    fn should_hash_the_public_key_encoding() {
        let registry = NetworkRegistry::bitcoin();
        let public_key = PublicKey::from_hex(COMPRESSED_HEX, registry.default_network()).unwrap();
        let address = Address::from_public_key(&public_key);
        assert_eq!(hex::encode(address.hash()), "e7b99921c3ad48e10d85a9481585b50a15fd640c");
        assert_eq!(hex::encode(address.to_payload()), "00e7b99921c3ad48e10d85a9481585b50a15fd640c");
    }

    #[test]
    fn should_parse_and_resolve_network() {
        let registry = NetworkRegistry::bitcoin();
        let text = "n2eCixH6C3197nEMaVFE2NV5RXW3cazW4Q";
        let address = Address::from_string(text, &registry).unwrap();
        assert!(Arc::ptr_eq(address.network(), registry.by_name("testnet").unwrap()));
        assert_eq!(hex::encode(address.hash()), "e7b99921c3ad48e10d85a9481585b50a15fd640c");
        assert_eq!(Address::from_string(&address.to_string(), &registry).unwrap(), address);
    }

    #[test]
    fn should_reject_malformed_text() {
        let registry = NetworkRegistry::bitcoin();
        assert!(matches!(
            Address::from_string("0N8FRuC7P1ZtLfkjrvGrCTGkZXuLk4p8rE", &registry),
            Err(Error::InvalidAddressEncoding(EncodingError::Base58(_)))
        ));
        assert!(matches!(
            Address::from_string("1N8FRuC7P1ZtLfkjrvGrCTGkZXuLk4p8rF", &registry),
            Err(Error::InvalidAddressEncoding(EncodingError::ChecksumMismatch))
        ));
        assert!(matches!(
            Address::from_string("1N8FRuC7P1Zt", &registry),
            Err(Error::InvalidAddressEncoding(EncodingError::InvalidLength { .. }))
        ));
    }

    #[test]
    fn should_reject_unregistered_version_byte() {
        let registry = NetworkRegistry::bitcoin();
        // version 0x05 (script hash) is not a registered pubkey version
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = 0x05;
        let text = base58::base58check_encode(&payload);
        assert!(matches!(Address::from_string(&text, &registry), Err(Error::UnknownNetwork(_))));
    }
}
