//! Canonical binary serialization of payments.
//!
//! Fields are emitted sorted by (type code, field code). Optional fields
//! that are absent are simply not emitted; the signature is included only
//! when serializing the final blob, never in the signing data.

use crate::error::TxError;
use crate::fields::{self, FieldId};
use crate::payment::Payment;
use vela_types::{AccountId, Amount, LedgerError};

/// Bit 63: amount is issued, not native.
pub(crate) const BIT_NOT_NATIVE: u64 = 0x8000_0000_0000_0000;
/// Bit 62: amount is positive.
pub(crate) const BIT_POSITIVE: u64 = 0x4000_0000_0000_0000;
/// Issued mantissas are normalized into [10^15, 10^16).
pub(crate) const MANTISSA_MIN: u64 = 1_000_000_000_000_000;
pub(crate) const MANTISSA_MAX: u64 = 10_000_000_000_000_000;
/// Issued exponent range; stored with an offset of 97.
pub(crate) const EXPONENT_MIN: i32 = -96;
pub(crate) const EXPONENT_MAX: i32 = 80;
pub(crate) const EXPONENT_OFFSET: i32 = 97;

/// Encode an issued-amount integer value into the 64-bit wire form
/// (sign, offset exponent, normalized mantissa).
pub(crate) fn issued_value_bits(value: i64) -> Result<u64, TxError> {
    if value == 0 {
        return Ok(BIT_NOT_NATIVE);
    }
    let mut mantissa = value.unsigned_abs();
    let mut exponent: i32 = 0;
    while mantissa < MANTISSA_MIN {
        mantissa *= 10;
        exponent -= 1;
    }
    while mantissa >= MANTISSA_MAX {
        if mantissa % 10 != 0 {
            return Err(LedgerError::AmountOutOfRange(format!(
                "{value}: mantissa cannot be represented exactly"
            ))
            .into());
        }
        mantissa /= 10;
        exponent += 1;
    }
    if !(EXPONENT_MIN..=EXPONENT_MAX).contains(&exponent) {
        return Err(LedgerError::AmountOutOfRange(format!("{value}: exponent {exponent}")).into());
    }
    let sign = if value > 0 { BIT_POSITIVE } else { 0 };
    let stored_exponent = ((exponent + EXPONENT_OFFSET) as u64) << 54;
    Ok(BIT_NOT_NATIVE | sign | stored_exponent | mantissa)
}

/// Variable-length prefix for blob fields (1-3 bytes).
pub(crate) fn vl_prefix(len: usize) -> Result<Vec<u8>, TxError> {
    if len <= 192 {
        Ok(vec![len as u8])
    } else if len <= 12480 {
        let adjusted = len - 193;
        Ok(vec![193 + (adjusted >> 8) as u8, (adjusted & 0xFF) as u8])
    } else if len <= 918_744 {
        let adjusted = len - 12481;
        Ok(vec![
            241 + (adjusted >> 16) as u8,
            ((adjusted >> 8) & 0xFF) as u8,
            (adjusted & 0xFF) as u8,
        ])
    } else {
        Err(TxError::Malformed(format!("blob of {len} bytes too large")))
    }
}

/// Accumulates canonically ordered fields into a wire blob.
struct BinarySerializer {
    buf: Vec<u8>,
}

impl BinarySerializer {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn header(&mut self, id: FieldId) {
        self.buf.extend_from_slice(&id.header());
    }

    fn u16_field(&mut self, id: FieldId, value: u16) {
        self.header(id);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn u32_field(&mut self, id: FieldId, value: u32) {
        self.header(id);
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    fn blob_field(&mut self, id: FieldId, bytes: &[u8]) -> Result<(), TxError> {
        self.header(id);
        self.buf.extend_from_slice(&vl_prefix(bytes.len())?);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn account_field(&mut self, id: FieldId, account: &AccountId) -> Result<(), TxError> {
        self.blob_field(id, account.as_bytes())
    }

    fn amount_field(&mut self, id: FieldId, amount: &Amount) -> Result<(), TxError> {
        self.header(id);
        match amount {
            Amount::Drops(drops) => {
                if *drops & (BIT_NOT_NATIVE | BIT_POSITIVE) != 0 {
                    return Err(
                        LedgerError::AmountOutOfRange(format!("{drops} drops")).into()
                    );
                }
                self.buf.extend_from_slice(&(drops | BIT_POSITIVE).to_be_bytes());
            }
            Amount::Issued {
                currency,
                issuer,
                value,
            } => {
                self.buf
                    .extend_from_slice(&issued_value_bits(*value)?.to_be_bytes());
                self.buf.extend_from_slice(currency.as_bytes());
                self.buf.extend_from_slice(issuer.as_bytes());
            }
        }
        Ok(())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Serialize a payment in canonical field order.
///
/// `include_signature` selects between the final wire blob and the data
/// covered by the signature.
pub fn serialize_payment(payment: &Payment, include_signature: bool) -> Result<Vec<u8>, TxError> {
    let mut s = BinarySerializer::new();

    s.u16_field(fields::TRANSACTION_TYPE, crate::payment::TT_PAYMENT);
    s.u32_field(fields::FLAGS, payment.flags);
    if let Some(sequence) = payment.sequence {
        s.u32_field(fields::SEQUENCE, sequence);
    }
    s.amount_field(fields::AMOUNT, &payment.amount)?;
    s.amount_field(fields::FEE, &Amount::Drops(payment.fee))?;
    if let Some(ref send_max) = payment.send_max {
        s.amount_field(fields::SEND_MAX, send_max)?;
    }
    let signing_pub_key = payment
        .signing_pub_key
        .as_ref()
        .ok_or(TxError::MissingField("SigningPubKey"))?;
    s.blob_field(fields::SIGNING_PUB_KEY, signing_pub_key.as_bytes())?;
    if include_signature {
        let signature = payment
            .signature
            .as_ref()
            .ok_or(TxError::MissingField("TxnSignature"))?;
        s.blob_field(fields::TXN_SIGNATURE, signature)?;
    }
    s.account_field(fields::ACCOUNT, &payment.account)?;
    s.account_field(fields::DESTINATION, &payment.destination)?;

    Ok(s.into_bytes())
}
