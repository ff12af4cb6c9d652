// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Chain-native mint module messages (`seiprotocol.seichain.mint`).
//!
//! Minting follows a fixed release schedule rather than an inflation curve;
//! dates are calendar-date strings.

use serde_json::{Map, Value};

use crate::codec::{json, AminoConverter, Message, RegistryEntry};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// One tranche of the token release schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduledTokenRelease {
    pub start_date: String,
    pub end_date: String,
    pub token_release_amount: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduledTokenReleasePartial {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub token_release_amount: Option<u64>,
}

impl Message for ScheduledTokenRelease {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.ScheduledTokenRelease";
    type Partial = ScheduledTokenReleasePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.start_date.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.start_date);
        }
        if !self.end_date.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.end_date);
        }
        if self.token_release_amount != 0 {
            writer.tag(3, WireType::Varint);
            writer.uint64(self.token_release_amount);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.start_date = reader.string()?,
                18 => message.end_date = reader.string()?,
                24 => {
                    message.token_release_amount =
                        json::safe_u64(reader.uint64()?, "token_release_amount")?
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
        if !self.start_date.is_empty() {
            obj.insert(
                "start_date".to_string(),
                Value::String(self.start_date.clone()),
            );
        }
        if !self.end_date.is_empty() {
            obj.insert("end_date".to_string(), Value::String(self.end_date.clone()));
        }
        if self.token_release_amount != 0 {
            obj.insert(
                "token_release_amount".to_string(),
                Value::from(self.token_release_amount),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            start_date: json::string_field(value, "start_date")?,
            end_date: json::string_field(value, "end_date")?,
            token_release_amount: json::u64_field(value, "token_release_amount")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            start_date: partial.start_date.unwrap_or_default(),
            end_date: partial.end_date.unwrap_or_default(),
            token_release_amount: partial.token_release_amount.unwrap_or_default(),
        }
    }
}

/// Module parameters: the mint denom and the release schedule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub mint_denom: String,
    pub token_release_schedule: Vec<ScheduledTokenRelease>,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPartial {
    pub mint_denom: Option<String>,
    pub token_release_schedule: Option<Vec<ScheduledTokenReleasePartial>>,
}

impl Message for Params {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.Params";
    type Partial = ParamsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.mint_denom.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.mint_denom);
        }
        for release in &self.token_release_schedule {
            writer.tag(2, WireType::Len);
            writer.fork();
            release.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.mint_denom = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message
                        .token_release_schedule
                        .push(ScheduledTokenRelease::decode_raw(reader, inner)?);
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
        if !self.mint_denom.is_empty() {
            obj.insert(
                "mint_denom".to_string(),
                Value::String(self.mint_denom.clone()),
            );
        }
        if !self.token_release_schedule.is_empty() {
            obj.insert(
                "token_release_schedule".to_string(),
                Value::Array(
                    self.token_release_schedule
                        .iter()
                        .map(ScheduledTokenRelease::to_json)
                        .collect(),
                ),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            mint_denom: json::string_field(value, "mint_denom")?,
            token_release_schedule: json::repeated_field(
                value,
                "token_release_schedule",
                ScheduledTokenRelease::from_json,
            )?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            mint_denom: partial.mint_denom.unwrap_or_default(),
            token_release_schedule: partial
                .token_release_schedule
                .unwrap_or_default()
                .into_iter()
                .map(ScheduledTokenRelease::from_partial)
                .collect(),
        }
    }
}

/// Request for the module parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamsRequest {}

#[derive(Debug, Clone, Default)]
pub struct QueryParamsRequestPartial {}

impl Message for QueryParamsRequest {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.QueryParamsRequest";
    type Partial = QueryParamsRequestPartial;

    fn encode_raw(&self, _writer: &mut WireWriter) {}

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        while reader.pos() < end {
            let tag = reader.uint32()?;
            if tag == 0 || tag & 0x7 == 4 {
                break;
            }
            reader.skip(tag & 0x7)?;
        }
        Ok(Self {})
    }

    fn to_json(&self) -> Value {
        Value::Object(Map::new())
    }

    fn from_json(_value: &Value) -> Result<Self> {
        Ok(Self {})
    }

    fn from_partial(_partial: Self::Partial) -> Self {
        Self {}
    }
}

/// The module parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamsResponse {
    pub params: Option<Params>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryParamsResponsePartial {
    pub params: Option<ParamsPartial>,
}

impl Message for QueryParamsResponse {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.QueryParamsResponse";
    type Partial = QueryParamsResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if let Some(params) = &self.params {
            writer.tag(1, WireType::Len);
            writer.fork();
            params.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => {
                    let inner = reader.delimited_end()?;
                    message.params = Some(Params::decode_raw(reader, inner)?);
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
        if let Some(params) = &self.params {
            obj.insert("params".to_string(), params.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            params: json::message_field(value, "params")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            params: partial.params.map(Params::from_partial),
        }
    }
}

/// Request for the current minter state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMinterRequest {}

#[derive(Debug, Clone, Default)]
pub struct QueryMinterRequestPartial {}

impl Message for QueryMinterRequest {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.QueryMinterRequest";
    type Partial = QueryMinterRequestPartial;

    fn encode_raw(&self, _writer: &mut WireWriter) {}

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        while reader.pos() < end {
            let tag = reader.uint32()?;
            if tag == 0 || tag & 0x7 == 4 {
                break;
            }
            reader.skip(tag & 0x7)?;
        }
        Ok(Self {})
    }

    fn to_json(&self) -> Value {
        Value::Object(Map::new())
    }

    fn from_json(_value: &Value) -> Result<Self> {
        Ok(Self {})
    }

    fn from_partial(_partial: Self::Partial) -> Self {
        Self {}
    }
}

/// The current minter state: the active release tranche and its progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryMinterResponse {
    pub start_date: String,
    pub end_date: String,
    pub denom: String,
    pub total_mint_amount: u64,
    pub remaining_mint_amount: u64,
    pub last_mint_amount: u64,
    pub last_mint_date: String,
    pub last_mint_height: u64,
}

#[derive(Debug, Clone, Default)]
pub struct QueryMinterResponsePartial {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub denom: Option<String>,
    pub total_mint_amount: Option<u64>,
    pub remaining_mint_amount: Option<u64>,
    pub last_mint_amount: Option<u64>,
    pub last_mint_date: Option<String>,
    pub last_mint_height: Option<u64>,
}

impl Message for QueryMinterResponse {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.mint.QueryMinterResponse";
    type Partial = QueryMinterResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.start_date.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.start_date);
        }
        if !self.end_date.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.end_date);
        }
        if !self.denom.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.denom);
        }
        if self.total_mint_amount != 0 {
            writer.tag(4, WireType::Varint);
            writer.uint64(self.total_mint_amount);
        }
        if self.remaining_mint_amount != 0 {
            writer.tag(5, WireType::Varint);
            writer.uint64(self.remaining_mint_amount);
        }
        if self.last_mint_amount != 0 {
            writer.tag(6, WireType::Varint);
            writer.uint64(self.last_mint_amount);
        }
        if !self.last_mint_date.is_empty() {
            writer.tag(7, WireType::Len);
            writer.string(&self.last_mint_date);
        }
        if self.last_mint_height != 0 {
            writer.tag(8, WireType::Varint);
            writer.uint64(self.last_mint_height);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.start_date = reader.string()?,
                18 => message.end_date = reader.string()?,
                26 => message.denom = reader.string()?,
                32 => {
                    message.total_mint_amount =
                        json::safe_u64(reader.uint64()?, "total_mint_amount")?
                }
                40 => {
                    message.remaining_mint_amount =
                        json::safe_u64(reader.uint64()?, "remaining_mint_amount")?
                }
                48 => {
                    message.last_mint_amount =
                        json::safe_u64(reader.uint64()?, "last_mint_amount")?
                }
                58 => message.last_mint_date = reader.string()?,
                64 => {
                    message.last_mint_height =
                        json::safe_u64(reader.uint64()?, "last_mint_height")?
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
        if !self.start_date.is_empty() {
            obj.insert(
                "start_date".to_string(),
                Value::String(self.start_date.clone()),
            );
        }
        if !self.end_date.is_empty() {
            obj.insert("end_date".to_string(), Value::String(self.end_date.clone()));
        }
        if !self.denom.is_empty() {
            obj.insert("denom".to_string(), Value::String(self.denom.clone()));
        }
        if self.total_mint_amount != 0 {
            obj.insert(
                "total_mint_amount".to_string(),
                Value::from(self.total_mint_amount),
            );
        }
        if self.remaining_mint_amount != 0 {
            obj.insert(
                "remaining_mint_amount".to_string(),
                Value::from(self.remaining_mint_amount),
            );
        }
        if self.last_mint_amount != 0 {
            obj.insert(
                "last_mint_amount".to_string(),
                Value::from(self.last_mint_amount),
            );
        }
        if !self.last_mint_date.is_empty() {
            obj.insert(
                "last_mint_date".to_string(),
                Value::String(self.last_mint_date.clone()),
            );
        }
        if self.last_mint_height != 0 {
            obj.insert(
                "last_mint_height".to_string(),
                Value::from(self.last_mint_height),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            start_date: json::string_field(value, "start_date")?,
            end_date: json::string_field(value, "end_date")?,
            denom: json::string_field(value, "denom")?,
            total_mint_amount: json::u64_field(value, "total_mint_amount")?,
            remaining_mint_amount: json::u64_field(value, "remaining_mint_amount")?,
            last_mint_amount: json::u64_field(value, "last_mint_amount")?,
            last_mint_date: json::string_field(value, "last_mint_date")?,
            last_mint_height: json::u64_field(value, "last_mint_height")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            start_date: partial.start_date.unwrap_or_default(),
            end_date: partial.end_date.unwrap_or_default(),
            denom: partial.denom.unwrap_or_default(),
            total_mint_amount: partial.total_mint_amount.unwrap_or_default(),
            remaining_mint_amount: partial.remaining_mint_amount.unwrap_or_default(),
            last_mint_amount: partial.last_mint_amount.unwrap_or_default(),
            last_mint_date: partial.last_mint_date.unwrap_or_default(),
            last_mint_height: partial.last_mint_height.unwrap_or_default(),
        }
    }
}

/// Registry entries for this module's query types.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<QueryParamsRequest>(),
        RegistryEntry::of::<QueryParamsResponse>(),
        RegistryEntry::of::<QueryMinterRequest>(),
        RegistryEntry::of::<QueryMinterResponse>(),
    ]
}

/// Legacy converters for this module's query types.
pub fn amino_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter::passthrough(QueryParamsRequest::TYPE_URL, "mint/QueryParamsRequest"),
        AminoConverter::passthrough(QueryParamsResponse::TYPE_URL, "mint/QueryParamsResponse"),
        AminoConverter::passthrough(QueryMinterRequest::TYPE_URL, "mint/QueryMinterRequest"),
        AminoConverter::passthrough(QueryMinterResponse::TYPE_URL, "mint/QueryMinterResponse"),
    ]
}
