// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Authorization module messages (`cosmos.authz.v1beta1`).

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::codec::{json, time, AminoConverter, Message, RegistryEntry};
use crate::core::Result;
use crate::types::cosmos::pagination::{
    PageRequest, PageRequestPartial, PageResponse, PageResponsePartial,
};
use crate::types::google::{Any, AnyPartial, Timestamp};
use crate::wire::{WireReader, WireType, WireWriter};

/// An authorization granted to a grantee, with an optional expiry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grant {
    pub authorization: Option<Any>,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct GrantPartial {
    pub authorization: Option<AnyPartial>,
    pub expiration: Option<DateTime<Utc>>,
}

impl Message for Grant {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.Grant";
    type Partial = GrantPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if let Some(authorization) = &self.authorization {
            writer.tag(1, WireType::Len);
            writer.fork();
            authorization.encode_raw(writer);
            writer.join();
        }
        if let Some(expiration) = &self.expiration {
            writer.tag(2, WireType::Len);
            writer.fork();
            time::datetime_to_timestamp(expiration).encode_raw(writer);
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
                    message.authorization = Some(Any::decode_raw(reader, inner)?);
                }
                18 => {
                    let inner = reader.delimited_end()?;
                    let ts = Timestamp::decode_raw(reader, inner)?;
                    message.expiration = Some(time::timestamp_to_datetime(&ts)?);
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
        if let Some(authorization) = &self.authorization {
            obj.insert("authorization".to_string(), authorization.to_json());
        }
        if let Some(expiration) = &self.expiration {
            obj.insert("expiration".to_string(), time::datetime_to_json(expiration));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            authorization: json::message_field(value, "authorization")?,
            expiration: time::timestamp_field(value, "expiration")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            authorization: partial.authorization.map(Any::from_partial),
            expiration: partial.expiration,
        }
    }
}

/// A grant together with the granter and grantee addresses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantAuthorization {
    pub granter: String,
    pub grantee: String,
    pub authorization: Option<Any>,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct GrantAuthorizationPartial {
    pub granter: Option<String>,
    pub grantee: Option<String>,
    pub authorization: Option<AnyPartial>,
    pub expiration: Option<DateTime<Utc>>,
}

impl Message for GrantAuthorization {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.GrantAuthorization";
    type Partial = GrantAuthorizationPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.granter.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.granter);
        }
        if !self.grantee.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.grantee);
        }
        if let Some(authorization) = &self.authorization {
            writer.tag(3, WireType::Len);
            writer.fork();
            authorization.encode_raw(writer);
            writer.join();
        }
        if let Some(expiration) = &self.expiration {
            writer.tag(4, WireType::Len);
            writer.fork();
            time::datetime_to_timestamp(expiration).encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.granter = reader.string()?,
                18 => message.grantee = reader.string()?,
                26 => {
                    let inner = reader.delimited_end()?;
                    message.authorization = Some(Any::decode_raw(reader, inner)?);
                }
                34 => {
                    let inner = reader.delimited_end()?;
                    let ts = Timestamp::decode_raw(reader, inner)?;
                    message.expiration = Some(time::timestamp_to_datetime(&ts)?);
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
        if !self.granter.is_empty() {
            obj.insert("granter".to_string(), Value::String(self.granter.clone()));
        }
        if !self.grantee.is_empty() {
            obj.insert("grantee".to_string(), Value::String(self.grantee.clone()));
        }
        if let Some(authorization) = &self.authorization {
            obj.insert("authorization".to_string(), authorization.to_json());
        }
        if let Some(expiration) = &self.expiration {
            obj.insert("expiration".to_string(), time::datetime_to_json(expiration));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            granter: json::string_field(value, "granter")?,
            grantee: json::string_field(value, "grantee")?,
            authorization: json::message_field(value, "authorization")?,
            expiration: time::timestamp_field(value, "expiration")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            granter: partial.granter.unwrap_or_default(),
            grantee: partial.grantee.unwrap_or_default(),
            authorization: partial.authorization.map(Any::from_partial),
            expiration: partial.expiration,
        }
    }
}

/// Request for grants between a granter and a grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGrantsRequest {
    pub granter: String,
    pub grantee: String,
    pub msg_type_url: String,
    pub pagination: Option<PageRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGrantsRequestPartial {
    pub granter: Option<String>,
    pub grantee: Option<String>,
    pub msg_type_url: Option<String>,
    pub pagination: Option<PageRequestPartial>,
}

impl Message for QueryGrantsRequest {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGrantsRequest";
    type Partial = QueryGrantsRequestPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.granter.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.granter);
        }
        if !self.grantee.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.grantee);
        }
        if !self.msg_type_url.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.msg_type_url);
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(4, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.granter = reader.string()?,
                18 => message.grantee = reader.string()?,
                26 => message.msg_type_url = reader.string()?,
                34 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageRequest::decode_raw(reader, inner)?);
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
        if !self.granter.is_empty() {
            obj.insert("granter".to_string(), Value::String(self.granter.clone()));
        }
        if !self.grantee.is_empty() {
            obj.insert("grantee".to_string(), Value::String(self.grantee.clone()));
        }
        if !self.msg_type_url.is_empty() {
            obj.insert(
                "msg_type_url".to_string(),
                Value::String(self.msg_type_url.clone()),
            );
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            granter: json::string_field(value, "granter")?,
            grantee: json::string_field(value, "grantee")?,
            msg_type_url: json::string_field(value, "msg_type_url")?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            granter: partial.granter.unwrap_or_default(),
            grantee: partial.grantee.unwrap_or_default(),
            msg_type_url: partial.msg_type_url.unwrap_or_default(),
            pagination: partial.pagination.map(PageRequest::from_partial),
        }
    }
}

/// Grants between a granter and a grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGrantsResponse {
    pub grants: Vec<Grant>,
    pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGrantsResponsePartial {
    pub grants: Option<Vec<GrantPartial>>,
    pub pagination: Option<PageResponsePartial>,
}

impl Message for QueryGrantsResponse {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGrantsResponse";
    type Partial = QueryGrantsResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for grant in &self.grants {
            writer.tag(1, WireType::Len);
            writer.fork();
            grant.encode_raw(writer);
            writer.join();
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(2, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
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
                    message.grants.push(Grant::decode_raw(reader, inner)?);
                }
                18 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageResponse::decode_raw(reader, inner)?);
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
        if !self.grants.is_empty() {
            obj.insert(
                "grants".to_string(),
                Value::Array(self.grants.iter().map(Grant::to_json).collect()),
            );
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            grants: json::repeated_field(value, "grants", Grant::from_json)?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            grants: partial
                .grants
                .unwrap_or_default()
                .into_iter()
                .map(Grant::from_partial)
                .collect(),
            pagination: partial.pagination.map(PageResponse::from_partial),
        }
    }
}

/// Request for every grant issued by a granter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGranterGrantsRequest {
    pub granter: String,
    pub pagination: Option<PageRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGranterGrantsRequestPartial {
    pub granter: Option<String>,
    pub pagination: Option<PageRequestPartial>,
}

impl Message for QueryGranterGrantsRequest {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGranterGrantsRequest";
    type Partial = QueryGranterGrantsRequestPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.granter.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.granter);
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(2, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.granter = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageRequest::decode_raw(reader, inner)?);
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
        if !self.granter.is_empty() {
            obj.insert("granter".to_string(), Value::String(self.granter.clone()));
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            granter: json::string_field(value, "granter")?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            granter: partial.granter.unwrap_or_default(),
            pagination: partial.pagination.map(PageRequest::from_partial),
        }
    }
}

/// Grants issued by a granter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGranterGrantsResponse {
    pub grants: Vec<GrantAuthorization>,
    pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGranterGrantsResponsePartial {
    pub grants: Option<Vec<GrantAuthorizationPartial>>,
    pub pagination: Option<PageResponsePartial>,
}

impl Message for QueryGranterGrantsResponse {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGranterGrantsResponse";
    type Partial = QueryGranterGrantsResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for grant in &self.grants {
            writer.tag(1, WireType::Len);
            writer.fork();
            grant.encode_raw(writer);
            writer.join();
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(2, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
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
                    message
                        .grants
                        .push(GrantAuthorization::decode_raw(reader, inner)?);
                }
                18 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageResponse::decode_raw(reader, inner)?);
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
        if !self.grants.is_empty() {
            obj.insert(
                "grants".to_string(),
                Value::Array(self.grants.iter().map(GrantAuthorization::to_json).collect()),
            );
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            grants: json::repeated_field(value, "grants", GrantAuthorization::from_json)?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            grants: partial
                .grants
                .unwrap_or_default()
                .into_iter()
                .map(GrantAuthorization::from_partial)
                .collect(),
            pagination: partial.pagination.map(PageResponse::from_partial),
        }
    }
}

/// Request for every grant received by a grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGranteeGrantsRequest {
    pub grantee: String,
    pub pagination: Option<PageRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGranteeGrantsRequestPartial {
    pub grantee: Option<String>,
    pub pagination: Option<PageRequestPartial>,
}

impl Message for QueryGranteeGrantsRequest {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGranteeGrantsRequest";
    type Partial = QueryGranteeGrantsRequestPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.grantee.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.grantee);
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(2, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.grantee = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageRequest::decode_raw(reader, inner)?);
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
        if !self.grantee.is_empty() {
            obj.insert("grantee".to_string(), Value::String(self.grantee.clone()));
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            grantee: json::string_field(value, "grantee")?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            grantee: partial.grantee.unwrap_or_default(),
            pagination: partial.pagination.map(PageRequest::from_partial),
        }
    }
}

/// Grants received by a grantee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryGranteeGrantsResponse {
    pub grants: Vec<GrantAuthorization>,
    pub pagination: Option<PageResponse>,
}

#[derive(Debug, Clone, Default)]
pub struct QueryGranteeGrantsResponsePartial {
    pub grants: Option<Vec<GrantAuthorizationPartial>>,
    pub pagination: Option<PageResponsePartial>,
}

impl Message for QueryGranteeGrantsResponse {
    const TYPE_URL: &'static str = "/cosmos.authz.v1beta1.QueryGranteeGrantsResponse";
    type Partial = QueryGranteeGrantsResponsePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for grant in &self.grants {
            writer.tag(1, WireType::Len);
            writer.fork();
            grant.encode_raw(writer);
            writer.join();
        }
        if let Some(pagination) = &self.pagination {
            writer.tag(2, WireType::Len);
            writer.fork();
            pagination.encode_raw(writer);
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
                    message
                        .grants
                        .push(GrantAuthorization::decode_raw(reader, inner)?);
                }
                18 => {
                    let inner = reader.delimited_end()?;
                    message.pagination = Some(PageResponse::decode_raw(reader, inner)?);
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
        if !self.grants.is_empty() {
            obj.insert(
                "grants".to_string(),
                Value::Array(self.grants.iter().map(GrantAuthorization::to_json).collect()),
            );
        }
        if let Some(pagination) = &self.pagination {
            obj.insert("pagination".to_string(), pagination.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            grants: json::repeated_field(value, "grants", GrantAuthorization::from_json)?,
            pagination: json::message_field(value, "pagination")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            grants: partial
                .grants
                .unwrap_or_default()
                .into_iter()
                .map(GrantAuthorization::from_partial)
                .collect(),
            pagination: partial.pagination.map(PageResponse::from_partial),
        }
    }
}

/// Registry entries for this module's query types.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<QueryGrantsRequest>(),
        RegistryEntry::of::<QueryGrantsResponse>(),
        RegistryEntry::of::<QueryGranterGrantsRequest>(),
        RegistryEntry::of::<QueryGranterGrantsResponse>(),
        RegistryEntry::of::<QueryGranteeGrantsRequest>(),
        RegistryEntry::of::<QueryGranteeGrantsResponse>(),
    ]
}

/// Legacy converters for this module's query types.
pub fn amino_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter::passthrough(
            QueryGrantsRequest::TYPE_URL,
            "cosmos-sdk/QueryGrantsRequest",
        ),
        AminoConverter::passthrough(
            QueryGrantsResponse::TYPE_URL,
            "cosmos-sdk/QueryGrantsResponse",
        ),
        AminoConverter::passthrough(
            QueryGranterGrantsRequest::TYPE_URL,
            "cosmos-sdk/QueryGranterGrantsRequest",
        ),
        AminoConverter::passthrough(
            QueryGranterGrantsResponse::TYPE_URL,
            "cosmos-sdk/QueryGranterGrantsResponse",
        ),
        AminoConverter::passthrough(
            QueryGranteeGrantsRequest::TYPE_URL,
            "cosmos-sdk/QueryGranteeGrantsRequest",
        ),
        AminoConverter::passthrough(
            QueryGranteeGrantsResponse::TYPE_URL,
            "cosmos-sdk/QueryGranteeGrantsResponse",
        ),
    ]
}
