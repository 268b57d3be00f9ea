use std::fmt;
use std::sync::Arc;

use crate::address::Address;
use crate::error::Error;
use crate::network::Network;
use crate::private_key::PrivateKey;
use crate::secp256k1::Point;
use crate::secp256k1::constants::{COMPRESSED_LEN, UNCOMPRESSED_LEN};

/// A secp256k1 public key bound to a network profile.
///
/// The compression flag is part of the key's identity: it selects the SEC1
/// form returned by [`PublicKey::to_bytes`], and through that the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
    compressed: bool,
    network: Arc<Network>,
}

impl PublicKey {
    pub fn new(point: Point, compressed: bool, network: &Arc<Network>) -> Self {
        Self {
            point,
            compressed,
            network: Arc::clone(network),
        }
    }

    /// Validates the 32-byte big-endian pair against the curve.
    pub fn from_pair(
        x: &[u8; 32],
        y: &[u8; 32],
        compressed: bool,
        network: &Arc<Network>,
    ) -> Result<Self, Error> {
        let point = Point::from_coordinates(x, y)?;
        Ok(Self::new(point, compressed, network))
    }

    /// Compression and network come from the private key.
    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        let point = Point::from_secret_key(private_key.secret_key());
        tracing::trace!(network = private_key.network().name(), "derived public key");
        Self::new(point, private_key.is_compressed(), private_key.network())
    }

    pub fn from_hex(text: &str, network: &Arc<Network>) -> Result<Self, Error> {
        let bytes = hex::decode(text)?;
        Self::from_bytes(&bytes, network)
    }

    /// Decodes the 33-byte compressed or 65-byte uncompressed SEC1 form.
    pub fn from_bytes(bytes: &[u8], network: &Arc<Network>) -> Result<Self, Error> {
        let decoded = match bytes.len() {
            COMPRESSED_LEN => {
                let mut compressed = [0u8; COMPRESSED_LEN];
                compressed.copy_from_slice(bytes);
                Point::from_compressed(&compressed).map(|point| (point, true))
            }
            UNCOMPRESSED_LEN => {
                let mut uncompressed = [0u8; UNCOMPRESSED_LEN];
                uncompressed.copy_from_slice(bytes);
                Point::from_uncompressed(&uncompressed).map(|point| (point, false))
            }
            _ => Err(Error::InvalidBinary("public key must be 33 or 65 bytes")),
        };

        match decoded {
            Ok((point, compressed)) => Ok(Self::new(point, compressed, network)),
            Err(e) => {
                tracing::debug!(len = bytes.len(), error = %e, "rejected public key bytes");
                Err(e)
            }
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        if self.compressed {
            self.point.compress().to_vec()
        } else {
            self.point.serialize_uncompressed().to_vec()
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn to_address(&self) -> Address {
        Address::from_public_key(self)
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    /// (x, y) as 32-byte big-endian integers.
    pub fn pair(&self) -> ([u8; 32], [u8; 32]) {
        (self.point.x_bytes(), self.point.y_bytes())
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn network(&self) -> &Arc<Network> {
        &self.network
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
