//! Canonical signing and transaction hashing.
//!
//! The signature covers SHA-512Half over the `STX\0` prefix plus the
//! serialization without the signature field. The transaction hash is
//! SHA-512Half over the `TXN\0` prefix plus the full signed serialization.

use crate::error::TxError;
use crate::payment::Payment;
use crate::serializer::serialize_payment;
use vela_crypto::{sha512_half_multi, sign_digest, verify_digest};
use vela_types::{KeyPair, TxHash};

/// Prefix for data covered by a single signature.
pub const SIGNING_PREFIX: [u8; 4] = *b"STX\0";
/// Prefix for the transaction identifier hash.
pub const TXN_PREFIX: [u8; 4] = *b"TXN\0";

/// The digest a payment's signature covers. The signing public key must
/// already be attached.
pub fn signing_digest(payment: &Payment) -> Result<[u8; 32], TxError> {
    let unsigned = serialize_payment(payment, false)?;
    Ok(sha512_half_multi(&[&SIGNING_PREFIX, &unsigned]))
}

/// Sign a payment with the given key pair, attaching the signing public
/// key and the canonical signature.
pub fn sign_payment(mut payment: Payment, keypair: &KeyPair) -> Result<Payment, TxError> {
    payment.signing_pub_key = Some(keypair.public);
    let digest = signing_digest(&payment)?;
    payment.signature = Some(sign_digest(&digest, &keypair.secret)?);
    Ok(payment)
}

/// Verify a signed payment's signature against its own signing public key.
pub fn verify_payment(payment: &Payment) -> Result<bool, TxError> {
    let public = payment
        .signing_pub_key
        .as_ref()
        .ok_or(TxError::MissingField("SigningPubKey"))?;
    let signature = payment
        .signature
        .as_ref()
        .ok_or(TxError::MissingField("TxnSignature"))?;
    let digest = signing_digest(payment)?;
    Ok(verify_digest(&digest, signature, public))
}

/// Serialize a signed payment to its wire blob.
pub fn to_blob(payment: &Payment) -> Result<Vec<u8>, TxError> {
    serialize_payment(payment, true)
}

/// Serialize a signed payment to its uppercase-hex blob form.
pub fn to_blob_hex(payment: &Payment) -> Result<String, TxError> {
    Ok(hex::encode_upper(to_blob(payment)?))
}

/// Compute the transaction hash of a signed payment.
pub fn tx_hash(payment: &Payment) -> Result<TxHash, TxError> {
    let blob = to_blob(payment)?;
    Ok(TxHash::new(sha512_half_multi(&[&TXN_PREFIX, &blob])))
}
