// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Base coin types (`cosmos.base.v1beta1`).
//!
//! Amounts are decimal strings: token quantities routinely exceed the safe
//! JSON integer range, so the schema keeps them out of numeric fields.

use serde_json::{Map, Value};

use crate::codec::{json, Message};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// A token amount with an integer `amount` string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default)]
pub struct CoinPartial {
    pub denom: Option<String>,
    pub amount: Option<String>,
}

impl Message for Coin {
    const TYPE_URL: &'static str = "/cosmos.base.v1beta1.Coin";
    type Partial = CoinPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.denom.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.denom);
        }
        if !self.amount.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.amount);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.denom = reader.string()?,
                18 => message.amount = reader.string()?,
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
        if !self.denom.is_empty() {
            obj.insert("denom".to_string(), Value::String(self.denom.clone()));
        }
        if !self.amount.is_empty() {
            obj.insert("amount".to_string(), Value::String(self.amount.clone()));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            denom: json::string_field(value, "denom")?,
            amount: json::string_field(value, "amount")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            denom: partial.denom.unwrap_or_default(),
            amount: partial.amount.unwrap_or_default(),
        }
    }
}

/// A token amount with a decimal `amount` string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecCoin {
    pub denom: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default)]
pub struct DecCoinPartial {
    pub denom: Option<String>,
    pub amount: Option<String>,
}

impl Message for DecCoin {
    const TYPE_URL: &'static str = "/cosmos.base.v1beta1.DecCoin";
    type Partial = DecCoinPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.denom.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.denom);
        }
        if !self.amount.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.amount);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.denom = reader.string()?,
                18 => message.amount = reader.string()?,
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
        if !self.denom.is_empty() {
            obj.insert("denom".to_string(), Value::String(self.denom.clone()));
        }
        if !self.amount.is_empty() {
            obj.insert("amount".to_string(), Value::String(self.amount.clone()));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            denom: json::string_field(value, "denom")?,
            amount: json::string_field(value, "amount")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            denom: partial.denom.unwrap_or_default(),
            amount: partial.amount.unwrap_or_default(),
        }
    }
}
