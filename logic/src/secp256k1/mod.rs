//! secp256k1 point handling: curve validation and the SEC1 point encodings.
//! Field arithmetic and scalar multiplication are delegated to `k256`.

pub mod constants;
pub mod point;

pub use point::Point;
