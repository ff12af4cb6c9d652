// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Mint module messages (`cosmos.mint.v1beta1`).
//!
//! Inflation and annual-provision values are decimal bytes on the wire
//! (base64 in JSON); parameter rates are decimal strings.

use serde_json::{Map, Value};

use crate::codec::{json, AminoConverter, Message, RegistryEntry};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// Module parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub mint_denom: String,
    pub inflation_rate_change: String,
    pub inflation_max: String,
    pub inflation_min: String,
    pub goal_bonded: String,
    pub blocks_per_year: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPartial {
    pub mint_denom: Option<String>,
    pub inflation_rate_change: Option<String>,
    pub inflation_max: Option<String>,
    pub inflation_min: Option<String>,
    pub goal_bonded: Option<String>,
    pub blocks_per_year: Option<u64>,
}

impl Message for Params {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.Params";
    type Partial = ParamsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.mint_denom.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.mint_denom);
        }
        if !self.inflation_rate_change.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.inflation_rate_change);
        }
        if !self.inflation_max.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.inflation_max);
        }
        if !self.inflation_min.is_empty() {
            writer.tag(4, WireType::Len);
            writer.string(&self.inflation_min);
        }
        if !self.goal_bonded.is_empty() {
            writer.tag(5, WireType::Len);
            writer.string(&self.goal_bonded);
        }
        if self.blocks_per_year != 0 {
            writer.tag(6, WireType::Varint);
            writer.uint64(self.blocks_per_year);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.mint_denom = reader.string()?,
                18 => message.inflation_rate_change = reader.string()?,
                26 => message.inflation_max = reader.string()?,
                34 => message.inflation_min = reader.string()?,
                42 => message.goal_bonded = reader.string()?,
                48 => message.blocks_per_year = json::safe_u64(reader.uint64()?, "blocks_per_year")?,
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
        if !self.inflation_rate_change.is_empty() {
            obj.insert(
                "inflation_rate_change".to_string(),
                Value::String(self.inflation_rate_change.clone()),
            );
        }
        if !self.inflation_max.is_empty() {
            obj.insert(
                "inflation_max".to_string(),
                Value::String(self.inflation_max.clone()),
            );
        }
        if !self.inflation_min.is_empty() {
            obj.insert(
                "inflation_min".to_string(),
                Value::String(self.inflation_min.clone()),
            );
        }
        if !self.goal_bonded.is_empty() {
            obj.insert(
                "goal_bonded".to_string(),
                Value::String(self.goal_bonded.clone()),
            );
        }
        if self.blocks_per_year != 0 {
            obj.insert(
                "blocks_per_year".to_string(),
                Value::from(self.blocks_per_year),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            mint_denom: json::string_field(value, "mint_denom")?,
            inflation_rate_change: json::string_field(value, "inflation_rate_change")?,
            inflation_max: json::string_field(value, "inflation_max")?,
            inflation_min: json::string_field(value, "inflation_min")?,
            goal_bonded: json::string_field(value, "goal_bonded")?,
            blocks_per_year: json::u64_field(value, "blocks_per_year")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            mint_denom: partial.mint_denom.unwrap_or_default(),
            inflation_rate_change: partial.inflation_rate_change.unwrap_or_default(),
            inflation_max: partial.inflation_max.unwrap_or_default(),
            inflation_min: partial.inflation_min.unwrap_or_default(),
            goal_bonded: partial.goal_bonded.unwrap_or_default(),
            blocks_per_year: partial.blocks_per_year.unwrap_or_default(),
        }
    }
}

/// Request for the module parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParamsRequest {}

#[derive(Debug, Clone, Default)]
pub struct QueryParamsRequestPartial {}

impl Message for QueryParamsRequest {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryParamsRequest";
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
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryParamsResponse";
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

/// Request for the current inflation rate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryInflationRequest {}

#[derive(Debug, Clone, Default)]
pub struct QueryInflationRequestPartial {}

impl Message for QueryInflationRequest {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryInflationRequest";
    type Partial = QueryInflationRequestPartial;

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

/// The current inflation rate as decimal bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryInflationResponse {
    pub inflation: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryInflationResponsePartial {
    pub inflation: Option<Vec<u8>>,
}

impl Message for QueryInflationResponse {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryInflationResponse";
    type Partial = QueryInflationResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.inflation.is_empty() {
            writer.tag(1, WireType::Len);
            writer.bytes(&self.inflation);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.inflation = reader.bytes()?,
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
        if !self.inflation.is_empty() {
            obj.insert(
                "inflation".to_string(),
                Value::String(json::base64_from_bytes(&self.inflation)),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            inflation: json::bytes_field(value, "inflation")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            inflation: partial.inflation.unwrap_or_default(),
        }
    }
}

/// Request for the current annual provisions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryAnnualProvisionsRequest {}

#[derive(Debug, Clone, Default)]
pub struct QueryAnnualProvisionsRequestPartial {}

impl Message for QueryAnnualProvisionsRequest {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryAnnualProvisionsRequest";
    type Partial = QueryAnnualProvisionsRequestPartial;

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

/// The current annual provisions as decimal bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryAnnualProvisionsResponse {
    pub annual_provisions: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryAnnualProvisionsResponsePartial {
    pub annual_provisions: Option<Vec<u8>>,
}

impl Message for QueryAnnualProvisionsResponse {
    const TYPE_URL: &'static str = "/cosmos.mint.v1beta1.QueryAnnualProvisionsResponse";
    type Partial = QueryAnnualProvisionsResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.annual_provisions.is_empty() {
            writer.tag(1, WireType::Len);
            writer.bytes(&self.annual_provisions);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.annual_provisions = reader.bytes()?,
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
        if !self.annual_provisions.is_empty() {
            obj.insert(
                "annual_provisions".to_string(),
                Value::String(json::base64_from_bytes(&self.annual_provisions)),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            annual_provisions: json::bytes_field(value, "annual_provisions")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            annual_provisions: partial.annual_provisions.unwrap_or_default(),
        }
    }
}

/// Registry entries for this module's query types.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<QueryParamsRequest>(),
        RegistryEntry::of::<QueryParamsResponse>(),
        RegistryEntry::of::<QueryInflationRequest>(),
        RegistryEntry::of::<QueryInflationResponse>(),
        RegistryEntry::of::<QueryAnnualProvisionsRequest>(),
        RegistryEntry::of::<QueryAnnualProvisionsResponse>(),
    ]
}

/// Legacy converters for this module's query types.
pub fn amino_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter::passthrough(QueryParamsRequest::TYPE_URL, "cosmos-sdk/QueryParamsRequest"),
        AminoConverter::passthrough(
            QueryParamsResponse::TYPE_URL,
            "cosmos-sdk/QueryParamsResponse",
        ),
        AminoConverter::passthrough(
            QueryInflationRequest::TYPE_URL,
            "cosmos-sdk/QueryInflationRequest",
        ),
        AminoConverter::passthrough(
            QueryInflationResponse::TYPE_URL,
            "cosmos-sdk/QueryInflationResponse",
        ),
        AminoConverter::passthrough(
            QueryAnnualProvisionsRequest::TYPE_URL,
            "cosmos-sdk/QueryAnnualProvisionsRequest",
        ),
        AminoConverter::passthrough(
            QueryAnnualProvisionsResponse::TYPE_URL,
            "cosmos-sdk/QueryAnnualProvisionsResponse",
        ),
    ]
}
