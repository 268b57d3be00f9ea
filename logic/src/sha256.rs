use sha2::{Digest, Sha256};

pub fn sha256_from_bytes(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// SHA256(SHA256(input)), the Base58Check checksum hash.
pub fn double_sha256(input: &[u8]) -> [u8; 32] {
    sha256_from_bytes(&sha256_from_bytes(input))
}
