use thiserror::Error;

/// Why a Base58Check string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid base58: {0}")]
    Base58(String),

    #[error("expected {expected} decoded bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The coordinates are the zero pair, out of field range, or off the curve.
    #[error("coordinates are not a point on secp256k1")]
    InvalidPair,

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Bad length, bad leading tag, or an x with no square root.
    #[error("invalid public key encoding: {0}")]
    InvalidBinary(&'static str),

    #[error("invalid address encoding: {0}")]
    InvalidAddressEncoding(EncodingError),

    /// Scalar is zero, not below the curve order, or the wrong length.
    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("invalid WIF encoding: {0}")]
    InvalidWif(EncodingError),

    #[error("invalid network registry: {0}")]
    InvalidRegistry(String),
}
