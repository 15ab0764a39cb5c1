//! Parsing wire blobs back into payments.
//!
//! Used to inspect signed blobs and to verify that serialization round
//! trips. Rejects truncated input, unknown fields, and non-payment
//! transaction types.

use crate::error::TxError;
use crate::fields::{self, FieldId};
use crate::payment::Payment;
use crate::serializer::{
    BIT_NOT_NATIVE, BIT_POSITIVE, EXPONENT_OFFSET, MANTISSA_MAX, MANTISSA_MIN,
};
use vela_types::{AccountId, Amount, Currency, PublicKey};

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn done(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], TxError> {
        if self.pos + n > self.data.len() {
            return Err(TxError::Malformed("truncated blob".into()));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, TxError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, TxError> {
        Ok(u16::from_be_bytes(self.take(2)?.try_into().unwrap()))
    }

    fn u32(&mut self) -> Result<u32, TxError> {
        Ok(u32::from_be_bytes(self.take(4)?.try_into().unwrap()))
    }

    fn u64(&mut self) -> Result<u64, TxError> {
        Ok(u64::from_be_bytes(self.take(8)?.try_into().unwrap()))
    }

    fn field_id(&mut self) -> Result<FieldId, TxError> {
        let first = self.u8()?;
        let type_nibble = first >> 4;
        let field_nibble = first & 0x0F;
        let (type_code, field_code) = match (type_nibble, field_nibble) {
            (0, 0) => (self.u8()? as u16, self.u8()? as u16),
            (0, f) => (self.u8()? as u16, f as u16),
            (t, 0) => (t as u16, self.u8()? as u16),
            (t, f) => (t as u16, f as u16),
        };
        Ok(FieldId::new(type_code, field_code))
    }

    fn vl_len(&mut self) -> Result<usize, TxError> {
        let first = self.u8()? as usize;
        if first <= 192 {
            Ok(first)
        } else if first <= 240 {
            let second = self.u8()? as usize;
            Ok(193 + ((first - 193) << 8) + second)
        } else if first <= 254 {
            let second = self.u8()? as usize;
            let third = self.u8()? as usize;
            Ok(12481 + ((first - 241) << 16) + (second << 8) + third)
        } else {
            Err(TxError::Malformed("invalid length prefix".into()))
        }
    }

    fn vl_bytes(&mut self) -> Result<&'a [u8], TxError> {
        let len = self.vl_len()?;
        self.take(len)
    }

    fn amount(&mut self) -> Result<Amount, TxError> {
        let bits = self.u64()?;
        if bits & BIT_NOT_NATIVE == 0 {
            if bits & BIT_POSITIVE == 0 {
                return Err(TxError::Malformed("negative native amount".into()));
            }
            return Ok(Amount::Drops(bits & !BIT_POSITIVE));
        }
        let currency = Currency::from_bytes(self.take(20)?.try_into().unwrap());
        let issuer = AccountId::new(self.take(20)?.try_into().unwrap());
        let value = issued_value_from_bits(bits)?;
        Ok(Amount::Issued {
            currency,
            issuer,
            value,
        })
    }
}

/// Decode the 64-bit issued-amount form back into an integer value.
///
/// The codec only emits integer values, so a fractional wire value is
/// rejected rather than rounded.
fn issued_value_from_bits(bits: u64) -> Result<i64, TxError> {
    let mantissa = bits & ((1 << 54) - 1);
    if mantissa == 0 {
        return Ok(0);
    }
    if !(MANTISSA_MIN..MANTISSA_MAX).contains(&mantissa) {
        return Err(TxError::Malformed("issued mantissa out of range".into()));
    }
    let exponent = ((bits >> 54) & 0xFF) as i32 - EXPONENT_OFFSET;
    let magnitude: u64 = if exponent >= 0 {
        let scale = 10u64
            .checked_pow(exponent as u32)
            .ok_or_else(|| TxError::Malformed("issued exponent too large".into()))?;
        mantissa
            .checked_mul(scale)
            .ok_or_else(|| TxError::Malformed("issued value overflows".into()))?
    } else {
        let scale = 10u64
            .checked_pow((-exponent) as u32)
            .ok_or_else(|| TxError::Malformed("issued exponent too small".into()))?;
        if mantissa % scale != 0 {
            return Err(TxError::Malformed("fractional issued value".into()));
        }
        mantissa / scale
    };
    let magnitude =
        i64::try_from(magnitude).map_err(|_| TxError::Malformed("issued value overflows".into()))?;
    Ok(if bits & BIT_POSITIVE != 0 {
        magnitude
    } else {
        -magnitude
    })
}

/// Parse a canonical payment blob.
pub fn deserialize_payment(blob: &[u8]) -> Result<Payment, TxError> {
    let mut r = Reader::new(blob);

    let mut tx_type: Option<u16> = None;
    let mut flags: Option<u32> = None;
    let mut sequence: Option<u32> = None;
    let mut amount: Option<Amount> = None;
    let mut fee: Option<Amount> = None;
    let mut send_max: Option<Amount> = None;
    let mut signing_pub_key: Option<PublicKey> = None;
    let mut signature: Option<Vec<u8>> = None;
    let mut account: Option<AccountId> = None;
    let mut destination: Option<AccountId> = None;

    while !r.done() {
        let id = r.field_id()?;
        match id {
            fields::TRANSACTION_TYPE => tx_type = Some(r.u16()?),
            fields::FLAGS => flags = Some(r.u32()?),
            fields::SEQUENCE => sequence = Some(r.u32()?),
            fields::AMOUNT => amount = Some(r.amount()?),
            fields::FEE => fee = Some(r.amount()?),
            fields::SEND_MAX => send_max = Some(r.amount()?),
            fields::SIGNING_PUB_KEY => {
                let bytes: [u8; 33] = r
                    .vl_bytes()?
                    .try_into()
                    .map_err(|_| TxError::Malformed("bad signing key length".into()))?;
                signing_pub_key = Some(PublicKey(bytes));
            }
            fields::TXN_SIGNATURE => signature = Some(r.vl_bytes()?.to_vec()),
            fields::ACCOUNT => {
                account = Some(AccountId::try_from(r.vl_bytes()?).map_err(TxError::Ledger)?)
            }
            fields::DESTINATION => {
                destination = Some(AccountId::try_from(r.vl_bytes()?).map_err(TxError::Ledger)?)
            }
            other => {
                return Err(TxError::UnknownField {
                    type_code: other.type_code,
                    field_code: other.field_code,
                })
            }
        }
    }

    let tx_type = tx_type.ok_or(TxError::MissingField("TransactionType"))?;
    if tx_type != crate::payment::TT_PAYMENT {
        return Err(TxError::UnsupportedType(tx_type));
    }
    let fee = match fee.ok_or(TxError::MissingField("Fee"))? {
        Amount::Drops(drops) => drops,
        Amount::Issued { .. } => return Err(TxError::Malformed("fee must be native".into())),
    };

    Ok(Payment {
        account: account.ok_or(TxError::MissingField("Account"))?,
        destination: destination.ok_or(TxError::MissingField("Destination"))?,
        amount: amount.ok_or(TxError::MissingField("Amount"))?,
        fee,
        flags: flags.unwrap_or(0),
        sequence,
        send_max,
        signing_pub_key,
        signature,
    })
}

/// Parse a payment from its hex blob form.
pub fn payment_from_hex(blob: &str) -> Result<Payment, TxError> {
    let bytes = hex::decode(blob).map_err(|e| TxError::Malformed(e.to_string()))?;
    deserialize_payment(&bytes)
}
