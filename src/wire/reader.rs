// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire format decoder for reading protobuf binary data.
//!
//! The reader is a bounds-checked cursor over a borrowed byte slice. Message
//! decoders loop on tags until a supplied end offset (the full buffer for a
//! top-level message, a length-delimited boundary for a nested one) and use
//! [`skip`](WireReader::skip) to step over unknown fields.

use crate::core::{CodecError, Result};

use super::WireType;

/// Maximum encoded size of a 64-bit varint.
const MAX_VARINT_LEN: usize = 10;

/// Wire format decoder.
///
/// # Example
///
/// ```
/// use chaincodec::wire::WireReader;
///
/// let mut reader = WireReader::new(&[0x0A, 0x05, b'h', b'e', b'l', b'l', b'o']);
/// let tag = reader.uint32().unwrap();
/// assert_eq!(tag >> 3, 1);
/// assert_eq!(reader.string().unwrap(), "hello");
/// ```
pub struct WireReader<'a> {
    /// The data buffer
    buf: &'a [u8],
    /// Current read position
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a new reader over a byte slice.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Get the current position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Get the total buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the remaining bytes available to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Read an unsigned varint, advancing the position.
    pub fn varint(&mut self) -> Result<u64> {
        let start = self.pos;
        let mut result: u64 = 0;
        let mut shift = 0;

        loop {
            if self.pos >= self.buf.len() {
                return Err(CodecError::truncated(1, 0, self.pos));
            }
            if self.pos - start >= MAX_VARINT_LEN {
                return Err(CodecError::invalid_varint(start));
            }

            let byte = self.buf[self.pos];
            self.pos += 1;

            result |= u64::from(byte & 0x7F) << shift;
            shift += 7;

            if byte & 0x80 == 0 {
                break;
            }
        }

        Ok(result)
    }

    /// Read a varint as a uint32, truncating to the low 32 bits.
    pub fn uint32(&mut self) -> Result<u32> {
        Ok(self.varint()? as u32)
    }

    /// Read a varint as a uint64.
    pub fn uint64(&mut self) -> Result<u64> {
        self.varint()
    }

    /// Read a two's-complement varint as an int32, truncating to 32 bits.
    pub fn int32(&mut self) -> Result<i32> {
        Ok(self.varint()? as i32)
    }

    /// Read a two's-complement varint as an int64.
    pub fn int64(&mut self) -> Result<i64> {
        Ok(self.varint()? as i64)
    }

    /// Read a single-byte bool. Any non-zero varint is `true`.
    pub fn bool(&mut self) -> Result<bool> {
        Ok(self.varint()? != 0)
    }

    /// Read an 8-byte little-endian value.
    pub fn fixed64(&mut self) -> Result<u64> {
        if self.pos + 8 > self.buf.len() {
            return Err(CodecError::truncated(8, self.remaining(), self.pos));
        }
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 8]);
        self.pos += 8;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Read a 4-byte little-endian value.
    pub fn fixed32(&mut self) -> Result<u32> {
        if self.pos + 4 > self.buf.len() {
            return Err(CodecError::truncated(4, self.remaining(), self.pos));
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.buf[self.pos..self.pos + 4]);
        self.pos += 4;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read a length-prefixed byte slice.
    pub fn bytes(&mut self) -> Result<Vec<u8>> {
        let length = self.varint()? as usize;
        if self.pos + length > self.buf.len() {
            return Err(CodecError::length_exceeded(length, self.pos, self.buf.len()));
        }
        let start = self.pos;
        self.pos += length;
        Ok(self.buf[start..self.pos].to_vec())
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn string(&mut self) -> Result<String> {
        let position = self.pos;
        let raw = self.bytes()?;
        String::from_utf8(raw)
            .map_err(|e| CodecError::json("string field", format!("invalid UTF-8 at position {position}: {e}")))
    }

    /// Read a length prefix and return the absolute end offset of the
    /// delimited region, validating it against the buffer bounds.
    pub fn delimited_end(&mut self) -> Result<usize> {
        let length = self.varint()? as usize;
        let end = self.pos + length;
        if end > self.buf.len() {
            return Err(CodecError::length_exceeded(length, self.pos, self.buf.len()));
        }
        Ok(end)
    }

    /// Skip a value of the given wire type without interpreting it.
    ///
    /// Used for unknown fields; the skip distance is dictated entirely by the
    /// wire type. Deprecated group types cannot be skipped.
    pub fn skip(&mut self, wire_type: u32) -> Result<()> {
        match WireType::from_tag(wire_type) {
            Some(WireType::Varint) => {
                self.varint()?;
            }
            Some(WireType::Fixed64) => {
                self.advance(8)?;
            }
            Some(WireType::Len) => {
                let end = self.delimited_end()?;
                self.pos = end;
            }
            Some(WireType::Fixed32) => {
                self.advance(4)?;
            }
            Some(WireType::StartGroup) | Some(WireType::EndGroup) => {
                return Err(CodecError::unsupported("group wire type (deprecated)"));
            }
            None => {
                return Err(CodecError::unsupported(format!(
                    "unknown wire type: {wire_type}"
                )));
            }
        }
        tracing::trace!(wire_type, position = self.pos, "skipped unknown field");
        Ok(())
    }

    fn advance(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(CodecError::truncated(count, self.remaining(), self.pos));
        }
        self.pos += count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_single_byte() {
        let mut r = WireReader::new(&[0x00, 0x01, 0x7F]);
        assert_eq!(r.varint().unwrap(), 0);
        assert_eq!(r.varint().unwrap(), 1);
        assert_eq!(r.varint().unwrap(), 127);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn test_varint_multi_byte() {
        let mut r = WireReader::new(&[0xAC, 0x02]);
        assert_eq!(r.varint().unwrap(), 300);
    }

    #[test]
    fn test_varint_max() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let mut r = WireReader::new(&data);
        assert_eq!(r.varint().unwrap(), u64::MAX);
    }

    #[test]
    fn test_varint_truncated() {
        let mut r = WireReader::new(&[0x80]);
        assert!(matches!(r.varint(), Err(CodecError::Truncated { .. })));
    }

    #[test]
    fn test_varint_overlong() {
        let data = [0xFF; 11];
        let mut r = WireReader::new(&data);
        assert!(matches!(r.varint(), Err(CodecError::InvalidVarint { .. })));
    }

    #[test]
    fn test_int64_negative() {
        let mut data = vec![0xFF; 9];
        data.push(0x01);
        let mut r = WireReader::new(&data);
        assert_eq!(r.int64().unwrap(), -1);
    }

    #[test]
    fn test_bool_values() {
        let mut r = WireReader::new(&[0x01, 0x00, 0x02]);
        assert!(r.bool().unwrap());
        assert!(!r.bool().unwrap());
        assert!(r.bool().unwrap());
    }

    #[test]
    fn test_fixed64() {
        let data = 0x0102030405060708u64.to_le_bytes();
        let mut r = WireReader::new(&data);
        assert_eq!(r.fixed64().unwrap(), 0x0102030405060708);
    }

    #[test]
    fn test_fixed64_truncated() {
        let mut r = WireReader::new(&[0x01, 0x02]);
        assert!(matches!(r.fixed64(), Err(CodecError::Truncated { .. })));
    }

    #[test]
    fn test_fixed32() {
        let data = 0x01020304u32.to_le_bytes();
        let mut r = WireReader::new(&data);
        assert_eq!(r.fixed32().unwrap(), 0x01020304);
    }

    #[test]
    fn test_string() {
        let mut r = WireReader::new(b"\x05hello");
        assert_eq!(r.string().unwrap(), "hello");
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut r = WireReader::new(&[0x02, 0xFF, 0xFE]);
        assert!(matches!(r.string(), Err(CodecError::Json { .. })));
    }

    #[test]
    fn test_bytes() {
        let mut r = WireReader::new(&[0x03, 0x01, 0x02, 0x03]);
        assert_eq!(r.bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bytes_length_past_end() {
        let mut r = WireReader::new(&[0x05, 0x01]);
        assert!(matches!(r.bytes(), Err(CodecError::LengthExceeded { .. })));
    }

    #[test]
    fn test_delimited_end() {
        let mut r = WireReader::new(&[0x02, 0xAA, 0xBB, 0xCC]);
        assert_eq!(r.delimited_end().unwrap(), 3);
        assert_eq!(r.pos(), 1);
    }

    #[test]
    fn test_delimited_end_past_buffer() {
        let mut r = WireReader::new(&[0x09, 0xAA]);
        assert!(matches!(
            r.delimited_end(),
            Err(CodecError::LengthExceeded { .. })
        ));
    }

    #[test]
    fn test_skip_varint() {
        let mut r = WireReader::new(&[0xAC, 0x02, 0x07]);
        r.skip(0).unwrap();
        assert_eq!(r.varint().unwrap(), 7);
    }

    #[test]
    fn test_skip_fixed64() {
        let mut r = WireReader::new(&[0; 9]);
        r.skip(1).unwrap();
        assert_eq!(r.pos(), 8);
    }

    #[test]
    fn test_skip_length_delimited() {
        let mut r = WireReader::new(&[0x03, 0xAA, 0xBB, 0xCC, 0x07]);
        r.skip(2).unwrap();
        assert_eq!(r.varint().unwrap(), 7);
    }

    #[test]
    fn test_skip_fixed32() {
        let mut r = WireReader::new(&[0; 5]);
        r.skip(5).unwrap();
        assert_eq!(r.pos(), 4);
    }

    #[test]
    fn test_skip_group_unsupported() {
        let mut r = WireReader::new(&[0x00]);
        assert!(matches!(r.skip(3), Err(CodecError::Unsupported { .. })));
    }

    #[test]
    fn test_skip_truncated() {
        let mut r = WireReader::new(&[0x01]);
        assert!(r.skip(1).is_err());
    }
}
