//! Canonical ECDSA signing over protocol digests.

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey as CurvePoint, Secp256k1, SecretKey as CurveScalar};
use vela_types::{LedgerError, PublicKey, SecretKey};

/// Sign a 32-byte digest, returning a DER-encoded canonical signature.
///
/// Signatures are deterministic (RFC 6979) and low-S, the only encoding
/// the ledger accepts under fully-canonical rules.
pub fn sign_digest(digest: &[u8; 32], secret: &SecretKey) -> Result<Vec<u8>, LedgerError> {
    let secp = Secp256k1::new();
    let scalar =
        CurveScalar::from_slice(secret.as_bytes()).map_err(|e| LedgerError::Key(e.to_string()))?;
    let message = Message::from_digest(*digest);
    let signature = secp.sign_ecdsa(&message, &scalar);
    Ok(signature.serialize_der().to_vec())
}

/// Verify a DER-encoded signature over a 32-byte digest.
pub fn verify_digest(digest: &[u8; 32], der_signature: &[u8], public: &PublicKey) -> bool {
    let secp = Secp256k1::new();
    let Ok(point) = CurvePoint::from_slice(public.as_bytes()) else {
        return false;
    };
    let Ok(signature) = Signature::from_der(der_signature) else {
        return false;
    };
    let message = Message::from_digest(*digest);
    secp.verify_ecdsa(&message, &signature, &point).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha512_half;
    use crate::keys::{derive_keypair, generate_seed};
    use vela_types::Seed;

    #[test]
    fn sign_and_verify() {
        let kp = derive_keypair(&generate_seed());
        let digest = sha512_half(b"payment to sign");
        let sig = sign_digest(&digest, &kp.secret).unwrap();
        assert!(verify_digest(&digest, &sig, &kp.public));
    }

    #[test]
    fn wrong_digest_fails() {
        let kp = derive_keypair(&generate_seed());
        let sig = sign_digest(&sha512_half(b"signed"), &kp.secret).unwrap();
        assert!(!verify_digest(&sha512_half(b"other"), &sig, &kp.public));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = derive_keypair(&Seed([1u8; 16]));
        let kp2 = derive_keypair(&Seed([2u8; 16]));
        let digest = sha512_half(b"message");
        let sig = sign_digest(&digest, &kp1.secret).unwrap();
        assert!(!verify_digest(&digest, &sig, &kp2.public));
    }

    #[test]
    fn signature_is_deterministic() {
        let kp = derive_keypair(&Seed([7u8; 16]));
        let digest = sha512_half(b"deterministic");
        let s1 = sign_digest(&digest, &kp.secret).unwrap();
        let s2 = sign_digest(&digest, &kp.secret).unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn malformed_signature_rejected() {
        let kp = derive_keypair(&generate_seed());
        let digest = sha512_half(b"message");
        assert!(!verify_digest(&digest, &[0x30, 0x00], &kp.public));
        assert!(!verify_digest(&digest, &[], &kp.public));
    }
}
