// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Chaincodec CLI
//!
//! Command-line tool for working with chain module payloads.
//!
//! ## Usage
//!
//! ```sh
//! # List registered type URLs
//! chaincodec types
//!
//! # Decode a hex payload to canonical JSON
//! chaincodec decode /cosmos.authz.v1beta1.QueryGrantsRequest 0a0161
//!
//! # Encode canonical JSON to a hex payload
//! chaincodec encode /cosmos.authz.v1beta1.QueryGrantsRequest '{"granter":"a"}'
//!
//! # Print a precompile ABI as JSON
//! chaincodec abi bank
//! ```

use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use chaincodec::precompiles::{bank, ibc, json as json_precompile};
use chaincodec::{global_amino_registry, global_registry};

type Result<T = ()> = anyhow::Result<T>;

/// Chaincodec - chain module payload toolkit
///
/// Decode and encode module query payloads through the type registry and
/// inspect the precompile ABI tables.
#[derive(Parser)]
#[command(name = "chaincodec")]
#[command(about = "Protobuf codec toolkit for chain module payloads", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Strata Contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// List registered type URLs and their legacy names
    Types,

    /// Decode a binary payload (hex) to canonical JSON
    Decode {
        /// Fully-qualified type URL, e.g. /cosmos.authz.v1beta1.QueryGrantsRequest
        type_url: String,

        /// Payload as hex, with or without a 0x prefix
        payload: String,
    },

    /// Encode canonical JSON to a binary payload (hex)
    Encode {
        /// Fully-qualified type URL
        type_url: String,

        /// Canonical JSON object
        json: String,
    },

    /// Print a precompile ABI as JSON
    Abi {
        /// Which precompile contract
        contract: Precompile,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Precompile {
    Bank,
    Ibc,
    Json,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Types => cmd_types(),
        Commands::Decode { type_url, payload } => cmd_decode(&type_url, &payload),
        Commands::Encode { type_url, json } => cmd_encode(&type_url, &json),
        Commands::Abi { contract } => cmd_abi(contract),
    }
}

/// Cmd: list registered types
fn cmd_types() -> Result<()> {
    let registry = global_registry();
    let amino = global_amino_registry();

    for type_url in registry.type_urls() {
        match amino.get(type_url) {
            Ok(converter) => println!("{type_url}  ({})", converter.amino_type),
            Err(_) => println!("{type_url}"),
        }
    }

    Ok(())
}

/// Cmd: binary -> JSON
fn cmd_decode(type_url: &str, payload: &str) -> Result<()> {
    let digits = payload.strip_prefix("0x").unwrap_or(payload);
    let bytes = hex::decode(digits).context("payload is not valid hex")?;

    let value = global_registry()
        .decode(type_url, &bytes)
        .with_context(|| format!("failed to decode {type_url}"))?;

    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Cmd: JSON -> binary
fn cmd_encode(type_url: &str, json: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(json).context("input is not valid JSON")?;

    let bytes = global_registry()
        .encode(type_url, &value)
        .with_context(|| format!("failed to encode {type_url}"))?;

    println!("{}", hex::encode(bytes));
    Ok(())
}

/// Cmd: print precompile ABI
fn cmd_abi(contract: Precompile) -> Result<()> {
    let (address, abi) = match contract {
        Precompile::Bank => (
            bank::BANK_PRECOMPILE_ADDRESS,
            serde_json::to_value(&bank::BANK_PRECOMPILE_ABI)?,
        ),
        Precompile::Ibc => (
            ibc::IBC_PRECOMPILE_ADDRESS,
            serde_json::to_value(&ibc::IBC_PRECOMPILE_ABI)?,
        ),
        Precompile::Json => (
            json_precompile::JSON_PRECOMPILE_ADDRESS,
            serde_json::to_value(&json_precompile::JSON_PRECOMPILE_ABI)?,
        ),
    };

    eprintln!("address: {address}");
    println!("{}", serde_json::to_string_pretty(&abi)?);
    Ok(())
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
