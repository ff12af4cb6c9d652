// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Chaincodec
//!
//! Client-side protobuf binding layer for Cosmos SDK chain module APIs.
//!
//! This library provides, for every supported message type: binary protobuf
//! encode/decode, canonical JSON encode/decode, and partial-object
//! construction with defaulting; a type registry for generic Any-typed
//! decoding; a legacy ("amino") JSON converter table; and static ABI/address
//! constants for the chain's precompiled contracts.
//!
//! ## Architecture
//!
//! - `wire/` - Protobuf wire format primitives (varint reader/writer,
//!   fork/join length-delimited regions, wire-type skip)
//! - `codec/` - The per-message [`Message`] contract, JSON conversion
//!   helpers, the type registry, and the amino converter table
//! - `types/` - Message types by proto package (google, cosmos, sei)
//! - `precompiles/` - Static ABI tables for the bank, IBC, and JSON
//!   precompiled contracts
//!
//! ## Example: binary round trip
//!
//! ```
//! use chaincodec::codec::Message;
//! use chaincodec::types::cosmos::authz::QueryGrantsRequest;
//!
//! let request = QueryGrantsRequest {
//!     granter: "a".to_string(),
//!     ..Default::default()
//! };
//! let bytes = request.encode();
//! assert_eq!(bytes, [0x0A, 0x01, b'a']);
//! assert_eq!(QueryGrantsRequest::decode(&bytes).unwrap(), request);
//! ```
//!
//! ## Example: generic decoding through the registry
//!
//! ```
//! use chaincodec::codec::global_registry;
//!
//! let json = global_registry()
//!     .decode("/cosmos.mint.v1beta1.QueryInflationResponse", &[0x0A, 0x02, 0x01, 0x02])
//!     .unwrap();
//! assert_eq!(json["inflation"], "AQI=");
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{CodecError, Result};

// Wire format primitives
pub mod wire;

pub use wire::{WireReader, WireType, WireWriter};

// Per-message codec contract, registry, amino
pub mod codec;

pub use codec::{
    global_amino_registry, global_registry, AminoConverter, AminoRegistry, Message, RegistryEntry,
    TypeRegistry,
};

// Message types by proto package
pub mod types;

// Precompiled contract ABI tables
pub mod precompiles;

pub use precompiles::{AbiFunction, AbiParam, Address, StateMutability};
