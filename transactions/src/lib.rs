//! The payment transaction: construction, canonical serialization, signing.
//!
//! - `payment`: the `Payment` struct and its builder
//! - `fields`: wire field identifiers and canonical ordering
//! - `serializer`: canonical binary encoding of a payment
//! - `deserializer`: parsing a wire blob back into a `Payment`
//! - `signing`: signing digests, signature attachment, transaction hashes

pub mod deserializer;
pub mod error;
pub mod fields;
pub mod payment;
pub mod serializer;
pub mod signing;

pub use deserializer::{deserialize_payment, payment_from_hex};
pub use error::TxError;
pub use payment::{Payment, PaymentBuilder, DEFAULT_FEE_DROPS, TF_FULLY_CANONICAL_SIG, TT_PAYMENT};
pub use serializer::serialize_payment;
pub use signing::{sign_payment, signing_digest, to_blob, to_blob_hex, tx_hash, verify_payment};
