//! Seed generation and deterministic secp256k1 key derivation.
//!
//! Derivation follows the ledger's account-key scheme: a root scalar is
//! taken from SHA-512Half(seed || root_seq), then the account secret is
//! root + t (mod n) where t = SHA-512Half(root_pubkey || 0u32 || key_seq).
//! Sequence counters are bumped past digests that are not valid scalars.

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{PublicKey as CurvePoint, Scalar, Secp256k1, SecretKey as CurveScalar};
use vela_types::{KeyPair, PublicKey, SecretKey, Seed};

use crate::hash::sha512_half_multi;

/// Generate a fresh 16-byte seed from a secure random source.
pub fn generate_seed() -> Seed {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    Seed(bytes)
}

/// Find the first sequence counter whose digest is a valid curve scalar.
fn find_scalar(digest_for: impl Fn(u32) -> [u8; 32]) -> CurveScalar {
    let mut seq: u32 = 0;
    loop {
        if let Ok(scalar) = CurveScalar::from_slice(&digest_for(seq)) {
            return scalar;
        }
        seq = seq.wrapping_add(1);
    }
}

/// Derive the account key pair for a seed (deterministic).
///
/// Always derives the first account key (key index 0), which is what the
/// address and signing commands operate on.
pub fn derive_keypair(seed: &Seed) -> KeyPair {
    let secp = Secp256k1::new();

    let root_secret =
        find_scalar(|seq| sha512_half_multi(&[seed.as_bytes(), &seq.to_be_bytes()]));
    let root_public = CurvePoint::from_secret_key(&secp, &root_secret).serialize();

    let mut key_seq: u32 = 0;
    let account_secret = loop {
        let digest = sha512_half_multi(&[&root_public, &0u32.to_be_bytes(), &key_seq.to_be_bytes()]);
        let tweaked = Scalar::from_be_bytes(digest)
            .ok()
            .and_then(|t| root_secret.add_tweak(&t).ok());
        match tweaked {
            Some(secret) => break secret,
            None => key_seq = key_seq.wrapping_add(1),
        }
    };
    let account_public = CurvePoint::from_secret_key(&secp, &account_secret);

    KeyPair {
        public: PublicKey(account_public.serialize()),
        secret: SecretKey(account_secret.secret_bytes()),
    }
}
