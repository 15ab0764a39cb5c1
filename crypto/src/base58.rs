//! Base58check encoding for seeds.
//!
//! The ledger uses its own base58 alphabet
//! (`rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz`) with a
//! 4-byte double-SHA256 checksum. Encoded values carry a one-byte version
//! prefix: seeds use `0x21` (strings start with `s`), account ids use
//! `0x00` (strings start with `r`).

use bs58::Alphabet;
use vela_types::{LedgerError, Seed};

/// Version prefix for encoded seeds.
pub(crate) const VERSION_SEED: u8 = 0x21;
/// Version prefix for encoded account identifiers.
pub(crate) const VERSION_ACCOUNT_ID: u8 = 0x00;

/// Encode a payload with a version prefix and checksum.
pub(crate) fn encode_versioned(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    bs58::encode(data)
        .with_alphabet(Alphabet::RIPPLE)
        .with_check()
        .into_string()
}

/// Decode a versioned base58check string, verifying the checksum and the
/// expected version byte. Returns the payload without the version byte.
pub(crate) fn decode_versioned(version: u8, s: &str) -> Option<Vec<u8>> {
    let decoded = bs58::decode(s)
        .with_alphabet(Alphabet::RIPPLE)
        .with_check(Some(version))
        .into_vec()
        .ok()?;
    // `with_check` keeps the version byte at the front.
    if decoded.is_empty() {
        return None;
    }
    Some(decoded[1..].to_vec())
}

/// Encode a seed in its human-readable secret form.
pub fn encode_seed(seed: &Seed) -> String {
    encode_versioned(VERSION_SEED, seed.as_bytes())
}

/// Decode a human-readable seed string.
pub fn decode_seed(s: &str) -> Result<Seed, LedgerError> {
    let payload = decode_versioned(VERSION_SEED, s).ok_or(LedgerError::InvalidSeed)?;
    let bytes: [u8; 16] = payload.try_into().map_err(|_| LedgerError::InvalidSeed)?;
    Ok(Seed(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_roundtrip() {
        let seed = Seed([0xAB; 16]);
        let encoded = encode_seed(&seed);
        assert!(encoded.starts_with('s'));
        let decoded = decode_seed(&encoded).unwrap();
        assert_eq!(decoded.as_bytes(), &[0xAB; 16]);
    }

    #[test]
    fn known_seed_decodes() {
        // The well-known "masterpassphrase" seed.
        let seed = decode_seed("snoPBrXtMeMyMHUVTgbuqAfg1SUTb").unwrap();
        assert_eq!(
            seed.as_bytes().as_slice(),
            hex::decode("DEDCE9CE67B451D852FD4E846FCDE31C").unwrap()
        );
    }

    #[test]
    fn known_seed_encodes() {
        let bytes: [u8; 16] = hex::decode("DEDCE9CE67B451D852FD4E846FCDE31C")
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(encode_seed(&Seed(bytes)), "snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let mut s = String::from("snoPBrXtMeMyMHUVTgbuqAfg1SUTb");
        s.pop();
        s.push('a');
        assert!(decode_seed(&s).is_err());
    }

    #[test]
    fn wrong_version_rejected() {
        // A valid account-id string is not a seed.
        assert!(decode_seed("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(decode_seed("").is_err());
        assert!(decode_seed("not base58 0OIl").is_err());
    }
}
