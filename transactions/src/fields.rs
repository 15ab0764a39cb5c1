//! Wire field identifiers.
//!
//! Every serialized field starts with a header naming its type code and
//! field code. Canonical serialization emits fields sorted by
//! (type code, field code), which the derived `Ord` on `FieldId` gives us
//! directly from the declaration below.

/// 16-bit unsigned integer fields.
pub const TYPE_UINT16: u16 = 1;
/// 32-bit unsigned integer fields.
pub const TYPE_UINT32: u16 = 2;
/// Amount fields (native or issued).
pub const TYPE_AMOUNT: u16 = 6;
/// Variable-length byte fields.
pub const TYPE_BLOB: u16 = 7;
/// Account identifier fields.
pub const TYPE_ACCOUNT: u16 = 8;

/// A field identifier: wire type code plus field code within the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId {
    pub type_code: u16,
    pub field_code: u16,
}

impl FieldId {
    pub const fn new(type_code: u16, field_code: u16) -> Self {
        Self {
            type_code,
            field_code,
        }
    }

    /// Encode the field header (1-3 bytes depending on code magnitudes).
    pub fn header(&self) -> Vec<u8> {
        let t = self.type_code;
        let f = self.field_code;
        match (t < 16, f < 16) {
            (true, true) => vec![((t as u8) << 4) | f as u8],
            (true, false) => vec![(t as u8) << 4, f as u8],
            (false, true) => vec![f as u8, t as u8],
            (false, false) => vec![0x00, t as u8, f as u8],
        }
    }
}

pub const TRANSACTION_TYPE: FieldId = FieldId::new(TYPE_UINT16, 2);
pub const FLAGS: FieldId = FieldId::new(TYPE_UINT32, 2);
pub const SEQUENCE: FieldId = FieldId::new(TYPE_UINT32, 4);
pub const AMOUNT: FieldId = FieldId::new(TYPE_AMOUNT, 1);
pub const FEE: FieldId = FieldId::new(TYPE_AMOUNT, 8);
pub const SEND_MAX: FieldId = FieldId::new(TYPE_AMOUNT, 9);
pub const SIGNING_PUB_KEY: FieldId = FieldId::new(TYPE_BLOB, 3);
pub const TXN_SIGNATURE: FieldId = FieldId::new(TYPE_BLOB, 4);
pub const ACCOUNT: FieldId = FieldId::new(TYPE_ACCOUNT, 1);
pub const DESTINATION: FieldId = FieldId::new(TYPE_ACCOUNT, 3);
