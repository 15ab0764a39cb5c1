//! The four ledger commands and their handlers.
//!
//! Each handler returns the JSON object to print on success or a
//! `CliError` that the caller renders as the JSON error object. Handlers
//! are plain functions over strings so the whole surface is testable
//! in-process.

use clap::Subcommand;
use serde_json::{json, Value};

use vela_crypto::{
    account_id, decode_seed, derive_keypair, encode_account_id, encode_seed, generate_seed,
    is_valid_account_id,
};
use vela_transactions::{sign_payment, to_blob_hex, tx_hash, PaymentBuilder};

use crate::error::CliError;
use crate::request::PaymentRequest;

#[derive(Subcommand)]
pub enum Command {
    /// Generate a fresh seed and print its account address and secret.
    #[command(name = "key_gen")]
    KeyGen,

    /// Derive the account address for an encoded seed.
    #[command(name = "key_conv")]
    KeyConv {
        /// Encoded seed (s...).
        seed: String,
    },

    /// Check whether a string is a valid account address.
    #[command(name = "key_chk")]
    KeyChk {
        /// Account address to validate (r...).
        address: String,
    },

    /// Build and sign a payment, printing its hash and wire blob.
    #[command(name = "tx_sign")]
    TxSign {
        /// Encoded seed of the sending account (s...).
        seed: String,
        /// JSON payment description (Destination, Amount, optional Fee,
        /// Sequence, SendMax).
        tx: String,
    },
}

pub fn execute_command(command: Command) -> Result<Value, CliError> {
    match command {
        Command::KeyGen => key_gen(),
        Command::KeyConv { seed } => key_conv(&seed),
        Command::KeyChk { address } => key_chk(&address),
        Command::TxSign { seed, tx } => tx_sign(&seed, &tx),
    }
}

fn key_gen() -> Result<Value, CliError> {
    let seed = generate_seed();
    let keypair = derive_keypair(&seed);
    let address = encode_account_id(&account_id(&keypair.public));
    tracing::debug!(%address, "generated new account");
    Ok(json!({
        "status": "success",
        "public": address,
        "private": encode_seed(&seed),
    }))
}

fn key_conv(seed: &str) -> Result<Value, CliError> {
    let seed = decode_seed(seed)?;
    let keypair = derive_keypair(&seed);
    Ok(json!({
        "status": "success",
        "public": encode_account_id(&account_id(&keypair.public)),
    }))
}

fn key_chk(address: &str) -> Result<Value, CliError> {
    Ok(json!({
        "status": "success",
        "result": is_valid_account_id(address),
    }))
}

fn tx_sign(seed: &str, tx: &str) -> Result<Value, CliError> {
    let seed = decode_seed(seed)?;
    let keypair = derive_keypair(&seed);
    let account = account_id(&keypair.public);

    let request: PaymentRequest =
        serde_json::from_str(tx).map_err(|e| CliError::BadRequest(e.to_string()))?;
    let destination = vela_crypto::decode_account_id(&request.destination)?;
    let amount = request.amount.resolve()?;

    let mut builder = PaymentBuilder::new(destination, amount);
    if let Some(fee) = request.fee {
        builder = builder.fee(fee);
    }
    if let Some(sequence) = request.sequence {
        builder = builder.sequence(sequence);
    }
    if let Some(ref send_max) = request.send_max {
        builder = builder.send_max(send_max.resolve()?);
    }

    let signed = sign_payment(builder.build(account), &keypair)?;
    let hash = tx_hash(&signed)?;
    tracing::debug!(%hash, "payment signed");
    Ok(json!({
        "status": "success",
        "hash": hash.to_string(),
        "tx_blob": to_blob_hex(&signed)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_transactions::{payment_from_hex, verify_payment, DEFAULT_FEE_DROPS};
    use vela_types::Amount;

    const MASTER_SEED: &str = "snoPBrXtMeMyMHUVTgbuqAfg1SUTb";
    const MASTER_ACCOUNT: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

    #[test]
    fn key_gen_outputs_decode_under_own_parsers() {
        let out = key_gen().unwrap();
        assert_eq!(out["status"], "success");
        assert!(is_valid_account_id(out["public"].as_str().unwrap()));
        assert!(decode_seed(out["private"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn key_gen_twice_differs() {
        let a = key_gen().unwrap();
        let b = key_gen().unwrap();
        assert_ne!(a["private"], b["private"]);
        assert_ne!(a["public"], b["public"]);
    }

    #[test]
    fn key_conv_roundtrips_key_gen() {
        let generated = key_gen().unwrap();
        let converted = key_conv(generated["private"].as_str().unwrap()).unwrap();
        assert_eq!(converted["public"], generated["public"]);
    }

    #[test]
    fn key_conv_known_vector() {
        let out = key_conv(MASTER_SEED).unwrap();
        assert_eq!(out["public"], MASTER_ACCOUNT);
    }

    #[test]
    fn key_conv_rejects_bad_seed() {
        assert!(key_conv("not a seed").is_err());
        assert!(key_conv(MASTER_ACCOUNT).is_err());
    }

    #[test]
    fn key_chk_reports_validity_without_crashing() {
        let valid = key_chk(MASTER_ACCOUNT).unwrap();
        assert_eq!(valid["result"], true);

        for bad in ["", "hello", MASTER_SEED, "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTx"] {
            let out = key_chk(bad).unwrap();
            assert_eq!(out["status"], "success");
            assert_eq!(out["result"], false);
        }
    }

    #[test]
    fn tx_sign_produces_verifiable_blob() {
        let tx = format!(r#"{{"Destination":"{MASTER_ACCOUNT}","Amount":1000000,"Sequence":3}}"#);
        let out = tx_sign(MASTER_SEED, &tx).unwrap();
        assert_eq!(out["status"], "success");

        let payment = payment_from_hex(out["tx_blob"].as_str().unwrap()).unwrap();
        assert_eq!(
            encode_account_id(&payment.destination),
            MASTER_ACCOUNT
        );
        assert_eq!(payment.amount, Amount::Drops(1_000_000));
        assert_eq!(payment.fee, DEFAULT_FEE_DROPS);
        assert_eq!(payment.sequence, Some(3));
        assert!(verify_payment(&payment).unwrap());

        // The sender is derived from the seed.
        assert_eq!(encode_account_id(&payment.account), MASTER_ACCOUNT);
        // Hash is the uppercase-hex transaction id.
        let hash = out["hash"].as_str().unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, tx_hash(&payment).unwrap().to_string());
    }

    #[test]
    fn tx_sign_with_issued_amount_and_send_max() {
        let generated = key_gen().unwrap();
        let issuer = generated["public"].as_str().unwrap();
        let tx = format!(
            r#"{{"Destination":"{MASTER_ACCOUNT}",
                 "Amount":{{"currency":"USD","issuer":"{issuer}","value":250}},
                 "Fee":15,
                 "SendMax":{{"currency":"EUR","issuer":"{issuer}","value":300}}}}"#
        );
        let out = tx_sign(MASTER_SEED, &tx).unwrap();
        let payment = payment_from_hex(out["tx_blob"].as_str().unwrap()).unwrap();
        match payment.amount {
            Amount::Issued { value, .. } => assert_eq!(value, 250),
            other => panic!("expected issued amount, got {other:?}"),
        }
        assert_eq!(payment.fee, 15);
        match payment.send_max {
            Some(Amount::Issued { value, .. }) => assert_eq!(value, 300),
            other => panic!("expected issued send max, got {other:?}"),
        }
    }

    #[test]
    fn tx_sign_missing_destination_is_a_structured_error() {
        let err = tx_sign(MASTER_SEED, r#"{"Amount":1000}"#).unwrap_err();
        assert!(err.to_string().contains("Destination"));
    }

    #[test]
    fn tx_sign_rejects_invalid_destination() {
        let err = tx_sign(
            MASTER_SEED,
            r#"{"Destination":"not an address","Amount":1000}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Ledger(_)));
    }

    #[test]
    fn tx_sign_rejects_malformed_json() {
        assert!(matches!(
            tx_sign(MASTER_SEED, "{not json"),
            Err(CliError::BadRequest(_))
        ));
    }

    #[test]
    fn tx_sign_rejects_bad_seed() {
        assert!(tx_sign("garbage", r#"{"Destination":"rX","Amount":1}"#).is_err());
    }
}
