//! Ledger amounts: native drops or issued currency.
//!
//! Native amounts are integer drops (u64, below 2^62 per the wire format).
//! Issued amounts carry a currency code, the issuer's account, and an
//! integer value; the mantissa/exponent wire normalization happens in the
//! transaction codec, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AccountId, Currency, LedgerError};

/// Largest representable native amount: the wire format reserves the top
/// two bits of the 64-bit field.
pub const MAX_DROPS: u64 = (1 << 62) - 1;

/// An amount of value on the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    /// Native currency, in drops.
    Drops(u64),
    /// Issued currency held against an issuer.
    Issued {
        currency: Currency,
        issuer: AccountId,
        value: i64,
    },
}

impl Amount {
    pub fn drops(value: u64) -> Result<Self, LedgerError> {
        if value > MAX_DROPS {
            return Err(LedgerError::AmountOutOfRange(format!(
                "{value} drops exceeds maximum"
            )));
        }
        Ok(Self::Drops(value))
    }

    pub fn issued(currency: Currency, issuer: AccountId, value: i64) -> Self {
        Self::Issued {
            currency,
            issuer,
            value,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Drops(_))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drops(v) => write!(f, "{v} drops"),
            Self::Issued {
                currency, value, ..
            } => write!(f, "{value} {currency}"),
        }
    }
}
