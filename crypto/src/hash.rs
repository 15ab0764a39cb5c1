//! Protocol digests: SHA-512Half and the account-id digest.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};

/// Compute SHA-512Half: the first 32 bytes of SHA-512.
///
/// This is the protocol's universal digest, used for key derivation,
/// signing data, and transaction hashes.
pub fn sha512_half(data: &[u8]) -> [u8; 32] {
    sha512_half_multi(&[data])
}

/// SHA-512Half over multiple byte slices in sequence (avoids concatenation
/// allocation).
pub fn sha512_half_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result[..32]);
    output
}

/// Compute the 20-byte account-id digest: RIPEMD160(SHA256(data)).
pub fn account_id_digest(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripe = Ripemd160::digest(sha);
    let mut output = [0u8; 20];
    output.copy_from_slice(&ripe);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha512_half_is_sha512_prefix() {
        let full = Sha512::digest(b"vela");
        let half = sha512_half(b"vela");
        assert_eq!(half[..], full[..32]);
    }

    #[test]
    fn sha512_half_multi_equivalent() {
        assert_eq!(sha512_half(b"helloworld"), sha512_half_multi(&[b"hello", b"world"]));
    }

    #[test]
    fn account_id_digest_known_length_and_determinism() {
        let d1 = account_id_digest(b"pubkey bytes");
        let d2 = account_id_digest(b"pubkey bytes");
        assert_eq!(d1, d2);
        assert_ne!(d1, [0u8; 20]);
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(sha512_half(b"a"), sha512_half(b"b"));
        assert_ne!(account_id_digest(b"a"), account_id_digest(b"b"));
    }
}
