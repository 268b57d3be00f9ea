use ripemd::{Digest, Ripemd160};

use crate::sha256;

pub fn ripemd160_from_bytes(input: &[u8]) -> [u8; 20] {
    Ripemd160::digest(input).into()
}

/// RIPEMD160(SHA256(input)). Kept apart from address construction so other
/// payload kinds can reuse it.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160_from_bytes(&sha256::sha256_from_bytes(input))
}
