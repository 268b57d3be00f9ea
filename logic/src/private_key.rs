use std::sync::Arc;

use k256::SecretKey;

use crate::address::Address;
use crate::base58;
use crate::error::{EncodingError, Error};
use crate::network::{Network, NetworkRegistry};
use crate::public_key::PublicKey;

const SCALAR_LEN: usize = 32;
const COMPRESSED_SUFFIX: u8 = 0x01;

/// A secp256k1 scalar in [1, n-1] with the compression preference and
/// network its public key inherits.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    secret: SecretKey,
    compressed: bool,
    network: Arc<Network>,
}

impl PrivateKey {
    pub fn new(
        bytes: &[u8; SCALAR_LEN],
        compressed: bool,
        network: &Arc<Network>,
    ) -> Result<Self, Error> {
        // k256 rejects zero and anything not below the curve order
        let secret = SecretKey::from_bytes(bytes.into()).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self {
            secret,
            compressed,
            network: Arc::clone(network),
        })
    }

    /// 64 hex characters. Keys read this way prefer the compressed form.
    pub fn from_hex(text: &str, network: &Arc<Network>) -> Result<Self, Error> {
        let bytes = hex::decode(text)?;
        if bytes.len() != SCALAR_LEN {
            return Err(Error::InvalidPrivateKey);
        }
        let mut scalar = [0u8; SCALAR_LEN];
        scalar.copy_from_slice(&bytes);
        Self::new(&scalar, true, network)
    }

    /// Wallet import format: Base58Check of
    /// `wif_version ++ scalar [++ 0x01 when compressed]`.
    pub fn from_wif(text: &str, registry: &NetworkRegistry) -> Result<Self, Error> {
        let payload = base58::base58check_decode(text).map_err(|e| {
            tracing::debug!(error = %e, "rejected WIF");
            Error::InvalidWif(e)
        })?;

        let compressed = match payload.len() {
            33 => false,
            34 if payload[33] == COMPRESSED_SUFFIX => true,
            34 => return Err(Error::InvalidPrivateKey),
            actual => {
                return Err(Error::InvalidWif(EncodingError::InvalidLength {
                    expected: 1 + SCALAR_LEN + 1,
                    actual,
                }));
            }
        };

        let network = registry.by_wif_version(payload[0])?;
        let mut scalar = [0u8; SCALAR_LEN];
        scalar.copy_from_slice(&payload[1..1 + SCALAR_LEN]);
        Self::new(&scalar, compressed, network)
    }

    pub fn to_wif(&self) -> String {
        let mut payload = Vec::with_capacity(1 + SCALAR_LEN + 1);
        payload.push(self.network.wif_version());
        payload.extend_from_slice(&self.to_bytes());
        if self.compressed {
            payload.push(COMPRESSED_SUFFIX);
        }
        base58::base58check_encode(&payload)
    }

    /// Big-endian scalar.
    pub fn to_bytes(&self) -> [u8; SCALAR_LEN] {
        let mut output = [0u8; SCALAR_LEN];
        output.copy_from_slice(&self.secret.to_bytes());
        output
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from_private_key(self)
    }

    pub fn to_address(&self) -> Address {
        self.to_public_key().to_address()
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
}
