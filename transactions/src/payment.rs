//! The payment transaction and its builder.

use vela_types::{AccountId, Amount, PublicKey};

/// Transaction type code for payments.
pub const TT_PAYMENT: u16 = 0;

/// Flag requiring fully-canonical signatures; always set on payments we
/// build.
pub const TF_FULLY_CANONICAL_SIG: u32 = 0x8000_0000;

/// Default fee in drops when the request does not name one.
pub const DEFAULT_FEE_DROPS: u64 = 1000;

/// A payment transaction.
///
/// `signing_pub_key` and `signature` are `None` until the payment has been
/// signed; serialization emits only the fields that are present.
#[derive(Clone, Debug)]
pub struct Payment {
    pub account: AccountId,
    pub destination: AccountId,
    pub amount: Amount,
    /// Fee in native drops.
    pub fee: u64,
    pub flags: u32,
    pub sequence: Option<u32>,
    pub send_max: Option<Amount>,
    pub signing_pub_key: Option<PublicKey>,
    /// DER-encoded canonical signature.
    pub signature: Option<Vec<u8>>,
}

/// Step-by-step construction of an unsigned payment, separate from signing
/// and serialization so each stage is independently testable.
pub struct PaymentBuilder {
    destination: AccountId,
    amount: Amount,
    fee: u64,
    flags: u32,
    sequence: Option<u32>,
    send_max: Option<Amount>,
}

impl PaymentBuilder {
    /// Start a payment to `destination` for `amount`, with the default fee
    /// and the fully-canonical-signature flag.
    pub fn new(destination: AccountId, amount: Amount) -> Self {
        Self {
            destination,
            amount,
            fee: DEFAULT_FEE_DROPS,
            flags: TF_FULLY_CANONICAL_SIG,
            sequence: None,
            send_max: None,
        }
    }

    pub fn fee(mut self, drops: u64) -> Self {
        self.fee = drops;
        self
    }

    pub fn sequence(mut self, sequence: u32) -> Self {
        self.sequence = Some(sequence);
        self
    }

    pub fn send_max(mut self, amount: Amount) -> Self {
        self.send_max = Some(amount);
        self
    }

    /// Finish construction with the sending account. The result is
    /// unsigned.
    pub fn build(self, account: AccountId) -> Payment {
        Payment {
            account,
            destination: self.destination,
            amount: self.amount,
            fee: self.fee,
            flags: self.flags,
            sequence: self.sequence,
            send_max: self.send_max,
            signing_pub_key: None,
            signature: None,
        }
    }
}
