// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Slashing module messages (`cosmos.slashing.v1beta1`).
//!
//! The missed-block arrays use packed repeated scalars. The packed record is
//! always written, even when the list is empty, for byte-compatibility with
//! the chain's encoder. Decoders accept both packed and unpacked forms.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::codec::{json, time, AminoConverter, Message, RegistryEntry};
use crate::core::Result;
use crate::types::google::{Duration, DurationPartial, Timestamp};
use crate::wire::{WireReader, WireType, WireWriter};

/// Signing liveness state of a validator (pre-migration layout, with the
/// missed-height counter tracked directly).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorSigningInfoLegacyMissedHeights {
    pub address: String,
    pub start_height: i64,
    pub jailed_until: Option<DateTime<Utc>>,
    pub tombstoned: bool,
    pub missed_blocks_counter: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorSigningInfoLegacyMissedHeightsPartial {
    pub address: Option<String>,
    pub start_height: Option<i64>,
    pub jailed_until: Option<DateTime<Utc>>,
    pub tombstoned: Option<bool>,
    pub missed_blocks_counter: Option<i64>,
}

impl Message for ValidatorSigningInfoLegacyMissedHeights {
    const TYPE_URL: &'static str =
        "/cosmos.slashing.v1beta1.ValidatorSigningInfoLegacyMissedHeights";
    type Partial = ValidatorSigningInfoLegacyMissedHeightsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.address);
        }
        if self.start_height != 0 {
            writer.tag(2, WireType::Varint);
            writer.int64(self.start_height);
        }
        if let Some(jailed_until) = &self.jailed_until {
            writer.tag(3, WireType::Len);
            writer.fork();
            time::datetime_to_timestamp(jailed_until).encode_raw(writer);
            writer.join();
        }
        if self.tombstoned {
            writer.tag(4, WireType::Varint);
            writer.bool(self.tombstoned);
        }
        if self.missed_blocks_counter != 0 {
            writer.tag(5, WireType::Varint);
            writer.int64(self.missed_blocks_counter);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.address = reader.string()?,
                16 => message.start_height = json::safe_i64(reader.int64()?, "start_height")?,
                26 => {
                    let inner = reader.delimited_end()?;
                    let ts = Timestamp::decode_raw(reader, inner)?;
                    message.jailed_until = Some(time::timestamp_to_datetime(&ts)?);
                }
                32 => message.tombstoned = reader.bool()?,
                40 => {
                    message.missed_blocks_counter =
                        json::safe_i64(reader.int64()?, "missed_blocks_counter")?
                }
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
        if !self.address.is_empty() {
            obj.insert("address".to_string(), Value::String(self.address.clone()));
        }
        if self.start_height != 0 {
            obj.insert("start_height".to_string(), Value::from(self.start_height));
        }
        if let Some(jailed_until) = &self.jailed_until {
            obj.insert(
                "jailed_until".to_string(),
                time::datetime_to_json(jailed_until),
            );
        }
        if self.tombstoned {
            obj.insert("tombstoned".to_string(), Value::Bool(self.tombstoned));
        }
        if self.missed_blocks_counter != 0 {
            obj.insert(
                "missed_blocks_counter".to_string(),
                Value::from(self.missed_blocks_counter),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            address: json::string_field(value, "address")?,
            start_height: json::i64_field(value, "start_height")?,
            jailed_until: time::timestamp_field(value, "jailed_until")?,
            tombstoned: json::bool_field(value, "tombstoned")?,
            missed_blocks_counter: json::i64_field(value, "missed_blocks_counter")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            address: partial.address.unwrap_or_default(),
            start_height: partial.start_height.unwrap_or_default(),
            jailed_until: partial.jailed_until,
            tombstoned: partial.tombstoned.unwrap_or_default(),
            missed_blocks_counter: partial.missed_blocks_counter.unwrap_or_default(),
        }
    }
}

/// Signing liveness state of a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorSigningInfo {
    pub address: String,
    pub start_height: i64,
    pub index_offset: i64,
    pub jailed_until: Option<DateTime<Utc>>,
    pub tombstoned: bool,
    pub missed_blocks_counter: i64,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorSigningInfoPartial {
    pub address: Option<String>,
    pub start_height: Option<i64>,
    pub index_offset: Option<i64>,
    pub jailed_until: Option<DateTime<Utc>>,
    pub tombstoned: Option<bool>,
    pub missed_blocks_counter: Option<i64>,
}

impl Message for ValidatorSigningInfo {
    const TYPE_URL: &'static str = "/cosmos.slashing.v1beta1.ValidatorSigningInfo";
    type Partial = ValidatorSigningInfoPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.address);
        }
        if self.start_height != 0 {
            writer.tag(2, WireType::Varint);
            writer.int64(self.start_height);
        }
        if self.index_offset != 0 {
            writer.tag(3, WireType::Varint);
            writer.int64(self.index_offset);
        }
        if let Some(jailed_until) = &self.jailed_until {
            writer.tag(4, WireType::Len);
            writer.fork();
            time::datetime_to_timestamp(jailed_until).encode_raw(writer);
            writer.join();
        }
        if self.tombstoned {
            writer.tag(5, WireType::Varint);
            writer.bool(self.tombstoned);
        }
        if self.missed_blocks_counter != 0 {
            writer.tag(6, WireType::Varint);
            writer.int64(self.missed_blocks_counter);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.address = reader.string()?,
                16 => message.start_height = json::safe_i64(reader.int64()?, "start_height")?,
                24 => message.index_offset = json::safe_i64(reader.int64()?, "index_offset")?,
                34 => {
                    let inner = reader.delimited_end()?;
                    let ts = Timestamp::decode_raw(reader, inner)?;
                    message.jailed_until = Some(time::timestamp_to_datetime(&ts)?);
                }
                40 => message.tombstoned = reader.bool()?,
                48 => {
                    message.missed_blocks_counter =
                        json::safe_i64(reader.int64()?, "missed_blocks_counter")?
                }
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
        if !self.address.is_empty() {
            obj.insert("address".to_string(), Value::String(self.address.clone()));
        }
        if self.start_height != 0 {
            obj.insert("start_height".to_string(), Value::from(self.start_height));
        }
        if self.index_offset != 0 {
            obj.insert("index_offset".to_string(), Value::from(self.index_offset));
        }
        if let Some(jailed_until) = &self.jailed_until {
            obj.insert(
                "jailed_until".to_string(),
                time::datetime_to_json(jailed_until),
            );
        }
        if self.tombstoned {
            obj.insert("tombstoned".to_string(), Value::Bool(self.tombstoned));
        }
        if self.missed_blocks_counter != 0 {
            obj.insert(
                "missed_blocks_counter".to_string(),
                Value::from(self.missed_blocks_counter),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            address: json::string_field(value, "address")?,
            start_height: json::i64_field(value, "start_height")?,
            index_offset: json::i64_field(value, "index_offset")?,
            jailed_until: time::timestamp_field(value, "jailed_until")?,
            tombstoned: json::bool_field(value, "tombstoned")?,
            missed_blocks_counter: json::i64_field(value, "missed_blocks_counter")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            address: partial.address.unwrap_or_default(),
            start_height: partial.start_height.unwrap_or_default(),
            index_offset: partial.index_offset.unwrap_or_default(),
            jailed_until: partial.jailed_until,
            tombstoned: partial.tombstoned.unwrap_or_default(),
            missed_blocks_counter: partial.missed_blocks_counter.unwrap_or_default(),
        }
    }
}

/// Missed block heights of a validator (pre-migration layout).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorMissedBlockArrayLegacyMissedHeights {
    pub address: String,
    pub missed_heights: Vec<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorMissedBlockArrayLegacyMissedHeightsPartial {
    pub address: Option<String>,
    pub missed_heights: Option<Vec<i64>>,
}

impl Message for ValidatorMissedBlockArrayLegacyMissedHeights {
    const TYPE_URL: &'static str =
        "/cosmos.slashing.v1beta1.ValidatorMissedBlockArrayLegacyMissedHeights";
    type Partial = ValidatorMissedBlockArrayLegacyMissedHeightsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.address);
        }
        writer.tag(2, WireType::Len);
        writer.fork();
        for height in &self.missed_heights {
            writer.int64(*height);
        }
        writer.join();
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.address = reader.string()?,
                16 => message
                    .missed_heights
                    .push(json::safe_i64(reader.int64()?, "missed_heights")?),
                18 => {
                    let inner = reader.delimited_end()?;
                    while reader.pos() < inner {
                        message
                            .missed_heights
                            .push(json::safe_i64(reader.int64()?, "missed_heights")?);
                    }
                }
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
        if !self.address.is_empty() {
            obj.insert("address".to_string(), Value::String(self.address.clone()));
        }
        if !self.missed_heights.is_empty() {
            obj.insert(
                "missed_heights".to_string(),
                Value::Array(self.missed_heights.iter().map(|h| Value::from(*h)).collect()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            address: json::string_field(value, "address")?,
            missed_heights: json::repeated_field(value, "missed_heights", |e| {
                json::i64_value(e, "missed_heights")
            })?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            address: partial.address.unwrap_or_default(),
            missed_heights: partial.missed_heights.unwrap_or_default(),
        }
    }
}

/// Missed block bitmap of a validator over a sliding window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorMissedBlockArray {
    pub address: String,
    pub window_size: i64,
    pub missed_blocks: Vec<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorMissedBlockArrayPartial {
    pub address: Option<String>,
    pub window_size: Option<i64>,
    pub missed_blocks: Option<Vec<u64>>,
}

impl Message for ValidatorMissedBlockArray {
    const TYPE_URL: &'static str = "/cosmos.slashing.v1beta1.ValidatorMissedBlockArray";
    type Partial = ValidatorMissedBlockArrayPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.address);
        }
        if self.window_size != 0 {
            writer.tag(2, WireType::Varint);
            writer.int64(self.window_size);
        }
        writer.tag(3, WireType::Len);
        writer.fork();
        for block in &self.missed_blocks {
            writer.uint64(*block);
        }
        writer.join();
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.address = reader.string()?,
                16 => message.window_size = json::safe_i64(reader.int64()?, "window_size")?,
                24 => message
                    .missed_blocks
                    .push(json::safe_u64(reader.uint64()?, "missed_blocks")?),
                26 => {
                    let inner = reader.delimited_end()?;
                    while reader.pos() < inner {
                        message
                            .missed_blocks
                            .push(json::safe_u64(reader.uint64()?, "missed_blocks")?);
                    }
                }
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
        if !self.address.is_empty() {
            obj.insert("address".to_string(), Value::String(self.address.clone()));
        }
        if self.window_size != 0 {
            obj.insert("window_size".to_string(), Value::from(self.window_size));
        }
        if !self.missed_blocks.is_empty() {
            obj.insert(
                "missed_blocks".to_string(),
                Value::Array(self.missed_blocks.iter().map(|b| Value::from(*b)).collect()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            address: json::string_field(value, "address")?,
            window_size: json::i64_field(value, "window_size")?,
            missed_blocks: json::repeated_field(value, "missed_blocks", |e| {
                json::u64_value(e, "missed_blocks")
            })?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            address: partial.address.unwrap_or_default(),
            window_size: partial.window_size.unwrap_or_default(),
            missed_blocks: partial.missed_blocks.unwrap_or_default(),
        }
    }
}

/// Module parameters. Fractions are decimal bytes on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub signed_blocks_window: i64,
    pub min_signed_per_window: Vec<u8>,
    pub downtime_jail_duration: Option<Duration>,
    pub slash_fraction_double_sign: Vec<u8>,
    pub slash_fraction_downtime: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPartial {
    pub signed_blocks_window: Option<i64>,
    pub min_signed_per_window: Option<Vec<u8>>,
    pub downtime_jail_duration: Option<DurationPartial>,
    pub slash_fraction_double_sign: Option<Vec<u8>>,
    pub slash_fraction_downtime: Option<Vec<u8>>,
}

impl Message for Params {
    const TYPE_URL: &'static str = "/cosmos.slashing.v1beta1.Params";
    type Partial = ParamsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if self.signed_blocks_window != 0 {
            writer.tag(1, WireType::Varint);
            writer.int64(self.signed_blocks_window);
        }
        if !self.min_signed_per_window.is_empty() {
            writer.tag(2, WireType::Len);
            writer.bytes(&self.min_signed_per_window);
        }
        if let Some(duration) = &self.downtime_jail_duration {
            writer.tag(3, WireType::Len);
            writer.fork();
            duration.encode_raw(writer);
            writer.join();
        }
        if !self.slash_fraction_double_sign.is_empty() {
            writer.tag(4, WireType::Len);
            writer.bytes(&self.slash_fraction_double_sign);
        }
        if !self.slash_fraction_downtime.is_empty() {
            writer.tag(5, WireType::Len);
            writer.bytes(&self.slash_fraction_downtime);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                8 => {
                    message.signed_blocks_window =
                        json::safe_i64(reader.int64()?, "signed_blocks_window")?
                }
                18 => message.min_signed_per_window = reader.bytes()?,
                26 => {
                    let inner = reader.delimited_end()?;
                    message.downtime_jail_duration =
                        Some(Duration::decode_raw(reader, inner)?);
                }
                34 => message.slash_fraction_double_sign = reader.bytes()?,
                42 => message.slash_fraction_downtime = reader.bytes()?,
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
        if self.signed_blocks_window != 0 {
            obj.insert(
                "signed_blocks_window".to_string(),
                Value::from(self.signed_blocks_window),
            );
        }
        if !self.min_signed_per_window.is_empty() {
            obj.insert(
                "min_signed_per_window".to_string(),
                Value::String(json::base64_from_bytes(&self.min_signed_per_window)),
            );
        }
        if let Some(duration) = &self.downtime_jail_duration {
            obj.insert("downtime_jail_duration".to_string(), duration.to_json());
        }
        if !self.slash_fraction_double_sign.is_empty() {
            obj.insert(
                "slash_fraction_double_sign".to_string(),
                Value::String(json::base64_from_bytes(&self.slash_fraction_double_sign)),
            );
        }
        if !self.slash_fraction_downtime.is_empty() {
            obj.insert(
                "slash_fraction_downtime".to_string(),
                Value::String(json::base64_from_bytes(&self.slash_fraction_downtime)),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            signed_blocks_window: json::i64_field(value, "signed_blocks_window")?,
            min_signed_per_window: json::bytes_field(value, "min_signed_per_window")?,
            downtime_jail_duration: json::message_field(value, "downtime_jail_duration")?,
            slash_fraction_double_sign: json::bytes_field(value, "slash_fraction_double_sign")?,
            slash_fraction_downtime: json::bytes_field(value, "slash_fraction_downtime")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            signed_blocks_window: partial.signed_blocks_window.unwrap_or_default(),
            min_signed_per_window: partial.min_signed_per_window.unwrap_or_default(),
            downtime_jail_duration: partial.downtime_jail_duration.map(Duration::from_partial),
            slash_fraction_double_sign: partial.slash_fraction_double_sign.unwrap_or_default(),
            slash_fraction_downtime: partial.slash_fraction_downtime.unwrap_or_default(),
        }
    }
}

/// Registry entries for this module's types.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<ValidatorSigningInfoLegacyMissedHeights>(),
        RegistryEntry::of::<ValidatorSigningInfo>(),
        RegistryEntry::of::<ValidatorMissedBlockArrayLegacyMissedHeights>(),
        RegistryEntry::of::<ValidatorMissedBlockArray>(),
        RegistryEntry::of::<Params>(),
    ]
}

/// Legacy converters for this module's types.
pub fn amino_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter::passthrough(
            ValidatorSigningInfoLegacyMissedHeights::TYPE_URL,
            "cosmos-sdk/ValidatorSigningInfoLegacyMissedHeights",
        ),
        AminoConverter::passthrough(
            ValidatorSigningInfo::TYPE_URL,
            "cosmos-sdk/ValidatorSigningInfo",
        ),
        AminoConverter::passthrough(
            ValidatorMissedBlockArrayLegacyMissedHeights::TYPE_URL,
            "cosmos-sdk/ValidatorMissedBlockArrayLegacyMissedHeights",
        ),
        AminoConverter::passthrough(
            ValidatorMissedBlockArray::TYPE_URL,
            "cosmos-sdk/ValidatorMissedBlockArray",
        ),
        AminoConverter::passthrough(Params::TYPE_URL, "cosmos-sdk/Params"),
    ]
}
