//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the Vela ledger tools.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid seed")]
    InvalidSeed,

    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),

    #[error("key error: {0}")]
    Key(String),
}
