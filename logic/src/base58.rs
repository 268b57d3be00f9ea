// Base58Check: base58(payload ++ first 4 bytes of SHA256(SHA256(payload))).
// The bitcoin alphabet omits 0, O, I and l; each leading zero byte becomes '1'.

use crate::error::EncodingError;
use crate::sha256;

pub const CHECKSUM_LEN: usize = 4;

pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256::double_sha256(payload);
    let mut output = [0u8; CHECKSUM_LEN];
    output.copy_from_slice(&hash[..CHECKSUM_LEN]);
    output
}

pub fn base58check_encode(payload: &[u8]) -> String {
    let mut buffer = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buffer.extend_from_slice(payload);
    buffer.extend_from_slice(&checksum(payload));
    bs58::encode(buffer).into_string()
}

fn base58_decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| EncodingError::Base58(e.to_string()))
}

fn verify_checksum(raw: &[u8]) -> Result<&[u8], EncodingError> {
    let (payload, expected) = raw.split_at(raw.len() - CHECKSUM_LEN);
    if checksum(payload) != expected {
        return Err(EncodingError::ChecksumMismatch);
    }
    Ok(payload)
}

/// Decodes and verifies, returning the payload without its checksum.
pub fn base58check_decode(text: &str) -> Result<Vec<u8>, EncodingError> {
    let raw = base58_decode(text)?;
    if raw.len() < CHECKSUM_LEN {
        return Err(EncodingError::InvalidLength {
            expected: CHECKSUM_LEN,
            actual: raw.len(),
        });
    }
    Ok(verify_checksum(&raw)?.to_vec())
}

/// Like `base58check_decode`, but the decoded buffer must be exactly
/// `N + CHECKSUM_LEN` bytes. Length is checked before the checksum.
pub fn base58check_decode_array<const N: usize>(text: &str) -> Result<[u8; N], EncodingError> {
    let raw = base58_decode(text)?;
    if raw.len() != N + CHECKSUM_LEN {
        return Err(EncodingError::InvalidLength {
            expected: N + CHECKSUM_LEN,
            actual: raw.len(),
        });
    }

    let mut output = [0u8; N];
    output.copy_from_slice(verify_checksum(&raw)?);
    Ok(output)
}
