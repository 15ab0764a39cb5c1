use thiserror::Error;
use vela_transactions::TxError;
use vela_types::LedgerError;

/// Unified error for every command path: each failure is rendered as the
/// JSON error object, never a crash.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("invalid transaction request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Tx(#[from] TxError),
}
