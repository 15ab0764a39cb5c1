//! vela-cli: offline key and payment-signing tool for the Vela ledger.
//!
//! One command per invocation, one JSON object on stdout. Diagnostics go
//! to stderr via `tracing` so stdout stays machine-readable.

use clap::error::ErrorKind;
use clap::Parser;
use serde_json::json;

mod commands;
mod error;
mod logging;
mod request;

use commands::Command;
use error::CliError;

#[derive(Parser)]
#[command(
    name = "vela-cli",
    about = "Generate keys, validate addresses, and sign payments for the Vela ledger",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    logging::init_tracing();

    let result = match Cli::try_parse() {
        Ok(cli) => commands::execute_command(cli.command),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => Err(CliError::Usage(e.to_string())),
    };

    match result {
        Ok(output) => {
            println!("{output}");
        }
        Err(err) => {
            tracing::debug!(error = %err, "command failed");
            println!("{}", json!({ "status": "error", "error": err.to_string() }));
            std::process::exit(1);
        }
    }
}
