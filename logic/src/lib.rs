//! Public key encoding and pay-to-public-key-hash address derivation for
//! secp256k1 chains.
//!
//! ```text
//! PrivateKey --scalar * G--> PublicKey --SEC1 bytes--> hash160 --Base58Check--> Address
//! ```
//!
//! Every key and address carries an `Arc<Network>` taken from a
//! [`NetworkRegistry`]; there is no process-wide default.

mod error;
mod network;
mod address;
mod public_key;
mod private_key;
pub mod base58;
pub mod ripemd160;
pub mod secp256k1;
pub mod sha256;

pub use error::*;
pub use network::*;
pub use address::*;
pub use public_key::*;
pub use private_key::*;
pub use secp256k1::Point;
