//! Account identifier: a 20-byte digest of the account's public key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte account identifier, derived as RIPEMD160(SHA256(public_key)).
///
/// The human-readable base58 form (with checksum) is produced and parsed by
/// `vela_crypto::base58`; this type only carries the raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 20]);

impl AccountId {
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", crate::hexfmt::encode(&self.0[..4]))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::hexfmt::encode(&self.0))
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = crate::LedgerError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 20] = bytes
            .try_into()
            .map_err(|_| crate::LedgerError::InvalidAddress(format!("{} bytes", bytes.len())))?;
        Ok(Self(arr))
    }
}
