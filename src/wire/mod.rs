// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf wire format primitives.
//!
//! This module provides the low-level binary I/O layer shared by every
//! message codec:
//! - [`WireWriter`] - Buffer-owning encoder with fork/join sub-regions
//! - [`WireReader`] - Bounds-checked positional decoder
//! - [`WireType`] - The 3-bit tag suffix of the protobuf wire format

pub mod reader;
pub mod writer;

pub use reader::WireReader;
pub use writer::WireWriter;

/// Protobuf wire type: the low 3 bits of a field tag, indicating how the
/// following bytes are parsed.
///
/// Group types are deprecated in the wire format and never produced by this
/// library; decoders treat an end-group tag as a record terminator and refuse
/// to skip over start-group payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Variable-length integer (int32/64, uint32/64, bool, enum)
    Varint = 0,
    /// 8-byte little-endian value (fixed64, sfixed64, double)
    Fixed64 = 1,
    /// Length-prefixed bytes (string, bytes, messages, packed scalars)
    Len = 2,
    /// Start of a group (deprecated, unsupported)
    StartGroup = 3,
    /// End of a group (deprecated, treated as a terminator)
    EndGroup = 4,
    /// 4-byte little-endian value (fixed32, sfixed32, float)
    Fixed32 = 5,
}

impl WireType {
    /// Decode the low 3 bits of a tag into a wire type.
    pub fn from_tag(tag: u32) -> Option<WireType> {
        match tag & 0x7 {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::Len),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

/// Compose a field tag: `(field_number << 3) | wire_type`.
#[inline]
pub fn tag(field_number: u32, wire_type: WireType) -> u32 {
    (field_number << 3) | wire_type as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_composition() {
        assert_eq!(tag(1, WireType::Len), 10);
        assert_eq!(tag(2, WireType::Varint), 16);
        assert_eq!(tag(4, WireType::Len), 34);
        assert_eq!(tag(1, WireType::Fixed64), 9);
    }

    #[test]
    fn test_wire_type_from_tag() {
        assert_eq!(WireType::from_tag(10), Some(WireType::Len));
        assert_eq!(WireType::from_tag(16), Some(WireType::Varint));
        assert_eq!(WireType::from_tag(9), Some(WireType::Fixed64));
        assert_eq!(WireType::from_tag(13), Some(WireType::Fixed32));
        assert_eq!(WireType::from_tag(12), Some(WireType::EndGroup));
    }
}
