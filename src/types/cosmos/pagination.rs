// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Query pagination types (`cosmos.base.query.v1beta1`).

use serde_json::{Map, Value};

use crate::codec::{json, Message};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// Pagination parameters for list queries. `key` and `offset` are mutually
/// exclusive cursors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageRequest {
    pub key: Vec<u8>,
    pub offset: u64,
    pub limit: u64,
    pub count_total: bool,
    pub reverse: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PageRequestPartial {
    pub key: Option<Vec<u8>>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub count_total: Option<bool>,
    pub reverse: Option<bool>,
}

impl Message for PageRequest {
    const TYPE_URL: &'static str = "/cosmos.base.query.v1beta1.PageRequest";
    type Partial = PageRequestPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.key.is_empty() {
            writer.tag(1, WireType::Len);
            writer.bytes(&self.key);
        }
        if self.offset != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint64(self.offset);
        }
        if self.limit != 0 {
            writer.tag(3, WireType::Varint);
            writer.uint64(self.limit);
        }
        if self.count_total {
            writer.tag(4, WireType::Varint);
            writer.bool(self.count_total);
        }
        if self.reverse {
            writer.tag(5, WireType::Varint);
            writer.bool(self.reverse);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.key = reader.bytes()?,
                16 => message.offset = json::safe_u64(reader.uint64()?, "offset")?,
                24 => message.limit = json::safe_u64(reader.uint64()?, "limit")?,
                32 => message.count_total = reader.bool()?,
                40 => message.reverse = reader.bool()?,
                _ => {
                    if tag == 0 || tag & 0x7 == 4 {
                        break;
                    }
                    reader.skip(tag & 0x7)?;
                }
            }
        }
        Ok(message)
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if !self.key.is_empty() {
            obj.insert(
                "key".to_string(),
                Value::String(json::base64_from_bytes(&self.key)),
            );
        }
        if self.offset != 0 {
            obj.insert("offset".to_string(), Value::from(self.offset));
        }
        if self.limit != 0 {
            obj.insert("limit".to_string(), Value::from(self.limit));
        }
        if self.count_total {
            obj.insert("count_total".to_string(), Value::Bool(self.count_total));
        }
        if self.reverse {
            obj.insert("reverse".to_string(), Value::Bool(self.reverse));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            key: json::bytes_field(value, "key")?,
            offset: json::u64_field(value, "offset")?,
            limit: json::u64_field(value, "limit")?,
            count_total: json::bool_field(value, "count_total")?,
            reverse: json::bool_field(value, "reverse")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            key: partial.key.unwrap_or_default(),
            offset: partial.offset.unwrap_or_default(),
            limit: partial.limit.unwrap_or_default(),
            count_total: partial.count_total.unwrap_or_default(),
            reverse: partial.reverse.unwrap_or_default(),
        }
    }
}

/// Pagination cursor returned by list queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResponse {
    pub next_key: Vec<u8>,
    pub total: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PageResponsePartial {
    pub next_key: Option<Vec<u8>>,
    pub total: Option<u64>,
}

impl Message for PageResponse {
    const TYPE_URL: &'static str = "/cosmos.base.query.v1beta1.PageResponse";
    type Partial = PageResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.next_key.is_empty() {
            writer.tag(1, WireType::Len);
            writer.bytes(&self.next_key);
        }
        if self.total != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint64(self.total);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.next_key = reader.bytes()?,
                16 => message.total = json::safe_u64(reader.uint64()?, "total")?,
                _ => {
                    if tag == 0 || tag & 0x7 == 4 {
                        break;
                    }
                    reader.skip(tag & 0x7)?;
                }
            }
        }
        Ok(message)
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if !self.next_key.is_empty() {
            obj.insert(
                "next_key".to_string(),
                Value::String(json::base64_from_bytes(&self.next_key)),
            );
        }
        if self.total != 0 {
            obj.insert("total".to_string(), Value::from(self.total));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            next_key: json::bytes_field(value, "next_key")?,
            total: json::u64_field(value, "total")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            next_key: partial.next_key.unwrap_or_default(),
            total: partial.total.unwrap_or_default(),
        }
    }
}
