// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! The per-message codec contract.
//!
//! Every protobuf message type in this crate implements [`Message`], which
//! fixes the six-operation surface shared by the whole binding layer:
//! binary encode/decode, canonical JSON encode/decode, and partial-object
//! construction with defaulting. The companion modules provide the shared
//! machinery:
//!
//! - [`json`] - JSON field accessors, base64, safe-integer guards
//! - [`time`] - well-known `Timestamp` mapping to [`chrono`] types
//! - [`registry`] - type-URL registry for generic Any-typed payloads
//! - [`amino`] - legacy JSON ("amino") converter table

pub mod amino;
pub mod json;
pub mod registry;
pub mod time;

pub use amino::{global_amino_registry, AminoConverter, AminoRegistry, FieldRename};
pub use registry::{global_registry, RegistryEntry, TypeRegistry};

use serde_json::Value;

use crate::core::Result;
use crate::wire::{WireReader, WireWriter};

/// A protobuf message with binary, JSON, and partial-construction codecs.
///
/// All operations are pure functions of their inputs; there is no cross-call
/// state. Decoding either fully succeeds or fails with a
/// [`CodecError`](crate::CodecError) without returning a partial message.
pub trait Message: Clone + Default + PartialEq + Sized {
    /// Fully-qualified type URL, `/<package>.<MessageName>`.
    const TYPE_URL: &'static str;

    /// Companion partial type: the message with every field optional,
    /// recursively for nested messages.
    type Partial: Default;

    /// Write the message body to `writer`, fields in ascending field-number
    /// order, omitting fields equal to their proto3 default. No length
    /// prefix or tag for the message itself is written; callers wrap nested
    /// messages in a fork/join region.
    fn encode_raw(&self, writer: &mut WireWriter);

    /// Decode the message body from `reader`, stopping at the absolute `end`
    /// offset. Starts from the default message; unknown fields are skipped
    /// by wire type; repeated scalar fields accept both packed and unpacked
    /// encodings.
    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self>;

    /// Convert to the canonical JSON mapping: sparse objects with
    /// default-valued fields omitted, snake_case names, bytes as base64,
    /// timestamps as RFC-3339 strings.
    fn to_json(&self) -> Value;

    /// Build from the canonical JSON mapping. Missing and `null` fields
    /// resolve to defaults; unknown keys are ignored.
    fn from_json(value: &Value) -> Result<Self>;

    /// Deep-merge a partial value over the default message. Every field is
    /// independently defaulted when absent; repeated fields always yield a
    /// fresh list.
    fn from_partial(partial: Self::Partial) -> Self;

    /// Encode to a standalone byte vector.
    fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::new();
        self.encode_raw(&mut writer);
        writer.finish()
    }

    /// Decode from a standalone byte buffer.
    fn decode(buf: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(buf);
        Self::decode_raw(&mut reader, buf.len())
    }

    /// Build from an optional partial, defaulting every field when `None`.
    fn create(partial: Option<Self::Partial>) -> Self {
        Self::from_partial(partial.unwrap_or_default())
    }
}
