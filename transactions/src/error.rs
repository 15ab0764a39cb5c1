use thiserror::Error;
use vela_types::LedgerError;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed transaction blob: {0}")]
    Malformed(String),

    #[error("unsupported transaction type: {0}")]
    UnsupportedType(u16),

    #[error("unknown field (type {type_code}, field {field_code})")]
    UnknownField { type_code: u16, field_code: u16 },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
