//! Fundamental types for the Vela ledger tools.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: seeds, keys, account identifiers, currencies, amounts, and the
//! shared error enum. Encoding and derivation logic lives in `vela-crypto`;
//! this crate is intentionally just data.

pub mod account;
pub mod amount;
pub mod currency;
pub mod error;
pub mod hash;
mod hexfmt;
pub mod keys;
pub mod seed;

pub use account::AccountId;
pub use amount::Amount;
pub use currency::Currency;
pub use error::LedgerError;
pub use hash::TxHash;
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use seed::Seed;
