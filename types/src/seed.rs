//! Seed type: the secret entropy a key pair is derived from.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 16-byte seed.
///
/// This type intentionally does not implement `Debug`, `Clone`, or serde
/// traits to prevent accidental exposure. Seed bytes are zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed(pub [u8; 16]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}
