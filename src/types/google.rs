// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Well-known protobuf types: `Timestamp`, `Duration`, `Any`.

use serde_json::{Map, Value};

use crate::codec::{json, Message};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// A point in time: seconds and nanos since the Unix epoch.
///
/// Timestamp-typed message fields are exposed as `chrono::DateTime<Utc>`;
/// this type is the wire and `{seconds, nanos}` JSON form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

#[derive(Debug, Clone, Default)]
pub struct TimestampPartial {
    pub seconds: Option<i64>,
    pub nanos: Option<i32>,
}

impl Message for Timestamp {
    const TYPE_URL: &'static str = "/google.protobuf.Timestamp";
    type Partial = TimestampPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if self.seconds != 0 {
            writer.tag(1, WireType::Varint);
            writer.int64(self.seconds);
        }
        if self.nanos != 0 {
            writer.tag(2, WireType::Varint);
            writer.int32(self.nanos);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                8 => message.seconds = json::safe_i64(reader.int64()?, "seconds")?,
                16 => message.nanos = reader.int32()?,
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
        if self.seconds != 0 {
            obj.insert("seconds".to_string(), Value::from(self.seconds));
        }
        if self.nanos != 0 {
            obj.insert("nanos".to_string(), Value::from(self.nanos));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            seconds: json::i64_field(value, "seconds")?,
            nanos: json::i32_field(value, "nanos")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            seconds: partial.seconds.unwrap_or_default(),
            nanos: partial.nanos.unwrap_or_default(),
        }
    }
}

/// A signed span of time: seconds and nanos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Duration {
    pub seconds: i64,
    pub nanos: i32,
}

#[derive(Debug, Clone, Default)]
pub struct DurationPartial {
    pub seconds: Option<i64>,
    pub nanos: Option<i32>,
}

impl Message for Duration {
    const TYPE_URL: &'static str = "/google.protobuf.Duration";
    type Partial = DurationPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if self.seconds != 0 {
            writer.tag(1, WireType::Varint);
            writer.int64(self.seconds);
        }
        if self.nanos != 0 {
            writer.tag(2, WireType::Varint);
            writer.int32(self.nanos);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                8 => message.seconds = json::safe_i64(reader.int64()?, "seconds")?,
                16 => message.nanos = reader.int32()?,
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
        if self.seconds != 0 {
            obj.insert("seconds".to_string(), Value::from(self.seconds));
        }
        if self.nanos != 0 {
            obj.insert("nanos".to_string(), Value::from(self.nanos));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            seconds: json::i64_field(value, "seconds")?,
            nanos: json::i32_field(value, "nanos")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            seconds: partial.seconds.unwrap_or_default(),
            nanos: partial.nanos.unwrap_or_default(),
        }
    }
}

/// A serialized message of arbitrary type, tagged with its type URL.
///
/// Payloads are decoded generically through the
/// [`TypeRegistry`](crate::codec::TypeRegistry).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Any {
    pub type_url: String,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct AnyPartial {
    pub type_url: Option<String>,
    pub value: Option<Vec<u8>>,
}

impl Message for Any {
    const TYPE_URL: &'static str = "/google.protobuf.Any";
    type Partial = AnyPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.type_url.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.type_url);
        }
        if !self.value.is_empty() {
            writer.tag(2, WireType::Len);
            writer.bytes(&self.value);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.type_url = reader.string()?,
                18 => message.value = reader.bytes()?,
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
        if !self.type_url.is_empty() {
            obj.insert("type_url".to_string(), Value::String(self.type_url.clone()));
        }
        if !self.value.is_empty() {
            obj.insert(
                "value".to_string(),
                Value::String(json::base64_from_bytes(&self.value)),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            type_url: json::string_field(value, "type_url")?,
            value: json::bytes_field(value, "value")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            type_url: partial.type_url.unwrap_or_default(),
            value: partial.value.unwrap_or_default(),
        }
    }
}
