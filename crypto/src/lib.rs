//! Cryptographic primitives for the Vela ledger.
//!
//! - **secp256k1** for deterministic account-key derivation and canonical
//!   ECDSA signatures
//! - **SHA-512Half** for all protocol digests (signing data, tx hashes)
//! - **Base58check** (ledger alphabet, double-SHA256 checksum) for seeds
//!   and account identifiers

pub mod address;
pub mod base58;
pub mod hash;
pub mod keys;
pub mod sign;

pub use address::{account_id, decode_account_id, encode_account_id, is_valid_account_id};
pub use base58::{decode_seed, encode_seed};
pub use hash::{account_id_digest, sha512_half, sha512_half_multi};
pub use keys::{derive_keypair, generate_seed};
pub use sign::{sign_digest, verify_digest};
