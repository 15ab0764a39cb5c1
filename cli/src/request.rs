//! The tx_sign JSON request schema.
//!
//! ```json
//! {
//!   "Destination": "r...",
//!   "Amount": 1000000,
//!   "Fee": 12,
//!   "Sequence": 5,
//!   "SendMax": { "currency": "USD", "issuer": "r...", "value": 100 }
//! }
//! ```
//!
//! `Amount` is either integer drops or an issued-currency object like
//! `SendMax`. Field resolution (base58 decoding, currency parsing) happens
//! in `resolve`, so schema errors and value errors stay distinct.

use serde::Deserialize;
use vela_types::{Amount, Currency};

use crate::error::CliError;

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Amount")]
    pub amount: AmountSpec,
    #[serde(rename = "Fee")]
    pub fee: Option<u64>,
    #[serde(rename = "Sequence")]
    pub sequence: Option<u32>,
    #[serde(rename = "SendMax")]
    pub send_max: Option<IssuedSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountSpec {
    Drops(u64),
    Issued(IssuedSpec),
}

#[derive(Debug, Deserialize)]
pub struct IssuedSpec {
    pub currency: String,
    pub issuer: String,
    pub value: i64,
}

impl AmountSpec {
    pub fn resolve(&self) -> Result<Amount, CliError> {
        match self {
            Self::Drops(drops) => Ok(Amount::drops(*drops)?),
            Self::Issued(spec) => spec.resolve(),
        }
    }
}

impl IssuedSpec {
    pub fn resolve(&self) -> Result<Amount, CliError> {
        let currency = Currency::parse(&self.currency)?;
        let issuer = vela_crypto::decode_account_id(&self.issuer)?;
        Ok(Amount::issued(currency, issuer, self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_amount_parses() {
        let req: PaymentRequest =
            serde_json::from_str(r#"{"Destination":"rX","Amount":1000}"#).unwrap();
        assert!(matches!(req.amount, AmountSpec::Drops(1000)));
        assert_eq!(req.fee, None);
        assert_eq!(req.sequence, None);
        assert!(req.send_max.is_none());
    }

    #[test]
    fn issued_amount_parses() {
        let req: PaymentRequest = serde_json::from_str(
            r#"{"Destination":"rX","Amount":{"currency":"USD","issuer":"rY","value":5}}"#,
        )
        .unwrap();
        match req.amount {
            AmountSpec::Issued(spec) => {
                assert_eq!(spec.currency, "USD");
                assert_eq!(spec.value, 5);
            }
            other => panic!("expected issued amount, got {other:?}"),
        }
    }

    #[test]
    fn missing_destination_is_a_schema_error() {
        let err = serde_json::from_str::<PaymentRequest>(r#"{"Amount":1000}"#).unwrap_err();
        assert!(err.to_string().contains("Destination"));
    }

    #[test]
    fn bad_issuer_fails_resolution() {
        let spec = IssuedSpec {
            currency: "USD".into(),
            issuer: "not an address".into(),
            value: 1,
        };
        assert!(spec.resolve().is_err());
    }
}
