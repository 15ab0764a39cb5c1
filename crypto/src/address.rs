//! Account identifier derivation and its base58 form.
//!
//! The account id is RIPEMD160(SHA256(compressed_public_key)); the
//! human-readable form is base58check with version prefix `0x00`, so all
//! account strings start with `r`.

use crate::base58::{decode_versioned, encode_versioned, VERSION_ACCOUNT_ID};
use crate::hash::account_id_digest;
use vela_types::{AccountId, LedgerError, PublicKey};

/// Derive the account identifier from a public key.
pub fn account_id(public_key: &PublicKey) -> AccountId {
    AccountId::new(account_id_digest(public_key.as_bytes()))
}

/// Encode an account id in its base58check address form.
pub fn encode_account_id(account: &AccountId) -> String {
    encode_versioned(VERSION_ACCOUNT_ID, account.as_bytes())
}

/// Decode a base58check address into an account id.
///
/// Fails on bad characters, a wrong version prefix, a checksum mismatch,
/// or a payload that is not exactly 20 bytes.
pub fn decode_account_id(s: &str) -> Result<AccountId, LedgerError> {
    let payload = decode_versioned(VERSION_ACCOUNT_ID, s)
        .ok_or_else(|| LedgerError::InvalidAddress(s.to_string()))?;
    let bytes: [u8; 20] = payload
        .try_into()
        .map_err(|_| LedgerError::InvalidAddress(s.to_string()))?;
    Ok(AccountId::new(bytes))
}

/// Validate that an address string decodes to a well-formed account id.
pub fn is_valid_account_id(s: &str) -> bool {
    decode_account_id(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{derive_keypair, generate_seed};

    #[test]
    fn derive_and_validate() {
        let seed = generate_seed();
        let kp = derive_keypair(&seed);
        let addr = encode_account_id(&account_id(&kp.public));
        assert!(addr.starts_with('r'));
        assert!(is_valid_account_id(&addr));
    }

    #[test]
    fn decode_roundtrip() {
        let account = AccountId::new([0x42; 20]);
        let addr = encode_account_id(&account);
        assert_eq!(decode_account_id(&addr).unwrap(), account);
    }

    #[test]
    fn known_address_valid() {
        assert!(is_valid_account_id("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"));
    }

    #[test]
    fn tampered_address_rejected() {
        let mut bad = String::from("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh");
        bad.pop();
        bad.push('s');
        assert!(!is_valid_account_id(&bad));
    }

    #[test]
    fn seed_string_is_not_an_address() {
        assert!(!is_valid_account_id("snoPBrXtMeMyMHUVTgbuqAfg1SUTb"));
    }

    #[test]
    fn garbage_is_not_an_address() {
        assert!(!is_valid_account_id(""));
        assert!(!is_valid_account_id("hello world"));
        assert!(!is_valid_account_id("r"));
    }
}
