// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message types, organized by proto package.
//!
//! - [`google`] - well-known types (Timestamp, Duration, Any)
//! - [`cosmos`] - Cosmos SDK module messages (authz, distribution, mint,
//!   slashing) and their base types
//! - [`sei`] - chain-native module messages (mint, evm)

pub mod cosmos;
pub mod google;
pub mod sei;

use crate::codec::{AminoConverter, RegistryEntry};

/// Registry entries contributed by every module, one per message type.
pub fn registry_entries() -> Vec<RegistryEntry> {
    let mut entries = Vec::new();
    entries.extend(cosmos::authz::registry_entries());
    entries.extend(cosmos::distribution::registry_entries());
    entries.extend(cosmos::mint::registry_entries());
    entries.extend(cosmos::slashing::registry_entries());
    entries.extend(sei::mint::registry_entries());
    entries.extend(sei::evm::registry_entries());
    entries
}

/// Legacy converters contributed by every module that has legacy names.
pub fn amino_converters() -> Vec<AminoConverter> {
    let mut converters = Vec::new();
    converters.extend(cosmos::authz::amino_converters());
    converters.extend(cosmos::distribution::amino_converters());
    converters.extend(cosmos::mint::amino_converters());
    converters.extend(cosmos::slashing::amino_converters());
    converters.extend(sei::mint::amino_converters());
    converters
}
