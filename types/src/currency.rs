//! Issued-currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::LedgerError;

/// The three-letter code of the native currency. Issued amounts must name a
/// different currency; native value is carried as plain drops instead.
pub const NATIVE_CODE: &str = "VLA";

/// A 160-bit currency code for issued amounts.
///
/// The standard form places a 3-character ASCII code at bytes 12..15 and
/// zeroes elsewhere. Non-standard codes are accepted as 40-char hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency([u8; 20]);

impl Currency {
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse a currency from its string form: either a 3-character code
    /// (letters, digits, and a few symbols) or 40 hex characters.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        if s.len() == 3 {
            if s.eq_ignore_ascii_case(NATIVE_CODE) {
                return Err(LedgerError::InvalidCurrency(format!(
                    "{s}: native currency cannot be issued"
                )));
            }
            if !s.bytes().all(is_standard_code_byte) {
                return Err(LedgerError::InvalidCurrency(s.to_string()));
            }
            let mut bytes = [0u8; 20];
            bytes[12..15].copy_from_slice(s.as_bytes());
            return Ok(Self(bytes));
        }
        if s.len() == 40 {
            let decoded =
                crate::hexfmt::decode(s).ok_or_else(|| LedgerError::InvalidCurrency(s.to_string()))?;
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(&decoded);
            return Ok(Self(bytes));
        }
        Err(LedgerError::InvalidCurrency(s.to_string()))
    }

    /// The 3-character code, if this is a standard-form currency.
    pub fn code(&self) -> Option<String> {
        let standard = self.0[..12].iter().all(|&b| b == 0)
            && self.0[15..].iter().all(|&b| b == 0)
            && self.0[12..15].iter().all(|&b| is_standard_code_byte(b));
        if standard {
            Some(String::from_utf8_lossy(&self.0[12..15]).into_owned())
        } else {
            None
        }
    }
}

fn is_standard_code_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'?' | b'!' | b'@' | b'#' | b'$' | b'%' | b'^' | b'&' | b'*' | b'<' | b'>' | b'(' | b')' | b'{' | b'}' | b'[' | b']' | b'|')
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "Currency({code})"),
            None => write!(f, "Currency({})", crate::hexfmt::encode_upper(&self.0)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "{}", crate::hexfmt::encode_upper(&self.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_code_roundtrip() {
        let c = Currency::parse("USD").unwrap();
        assert_eq!(c.code().as_deref(), Some("USD"));
        assert_eq!(&c.as_bytes()[12..15], b"USD");
        assert!(c.as_bytes()[..12].iter().all(|&b| b == 0));
    }

    #[test]
    fn native_code_rejected() {
        assert!(Currency::parse("VLA").is_err());
        assert!(Currency::parse("vla").is_err());
    }

    #[test]
    fn hex_form_accepted() {
        let hex = "0158415500000000C1F76FF6ECB0BAC600000000";
        let c = Currency::parse(hex).unwrap();
        assert_eq!(c.code(), None);
        assert_eq!(format!("{c}"), hex);
    }

    #[test]
    fn bad_lengths_rejected() {
        assert!(Currency::parse("US").is_err());
        assert!(Currency::parse("USDX").is_err());
        assert!(Currency::parse("").is_err());
    }
}
