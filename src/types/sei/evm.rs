// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! EVM module parameter messages (`seiprotocol.seichain.evm`).
//!
//! Field numbering starts at 2; 1 and 5-7 are reserved upstream. Fee values
//! are decimal strings.

use serde_json::{Map, Value};

use crate::codec::{json, Message, RegistryEntry};
use crate::core::Result;
use crate::wire::{WireReader, WireType, WireWriter};

/// Module parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub priority_normalizer: String,
    pub base_fee_per_gas: String,
    pub minimum_fee_per_gas: String,
    pub whitelisted_cw_code_hashes_for_delegate_call: Vec<Vec<u8>>,
    pub deliver_tx_hook_wasm_gas_limit: u64,
    pub max_dynamic_base_fee_upward_adjustment: String,
    pub max_dynamic_base_fee_downward_adjustment: String,
    pub target_gas_used_per_block: u64,
    pub maximum_fee_per_gas: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPartial {
    pub priority_normalizer: Option<String>,
    pub base_fee_per_gas: Option<String>,
    pub minimum_fee_per_gas: Option<String>,
    pub whitelisted_cw_code_hashes_for_delegate_call: Option<Vec<Vec<u8>>>,
    pub deliver_tx_hook_wasm_gas_limit: Option<u64>,
    pub max_dynamic_base_fee_upward_adjustment: Option<String>,
    pub max_dynamic_base_fee_downward_adjustment: Option<String>,
    pub target_gas_used_per_block: Option<u64>,
    pub maximum_fee_per_gas: Option<String>,
}

impl Message for Params {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.evm.Params";
    type Partial = ParamsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.priority_normalizer.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.priority_normalizer);
        }
        if !self.base_fee_per_gas.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.base_fee_per_gas);
        }
        if !self.minimum_fee_per_gas.is_empty() {
            writer.tag(4, WireType::Len);
            writer.string(&self.minimum_fee_per_gas);
        }
        for hash in &self.whitelisted_cw_code_hashes_for_delegate_call {
            writer.tag(8, WireType::Len);
            writer.bytes(hash);
        }
        if self.deliver_tx_hook_wasm_gas_limit != 0 {
            writer.tag(9, WireType::Varint);
            writer.uint64(self.deliver_tx_hook_wasm_gas_limit);
        }
        if !self.max_dynamic_base_fee_upward_adjustment.is_empty() {
            writer.tag(10, WireType::Len);
            writer.string(&self.max_dynamic_base_fee_upward_adjustment);
        }
        if !self.max_dynamic_base_fee_downward_adjustment.is_empty() {
            writer.tag(11, WireType::Len);
            writer.string(&self.max_dynamic_base_fee_downward_adjustment);
        }
        if self.target_gas_used_per_block != 0 {
            writer.tag(12, WireType::Varint);
            writer.uint64(self.target_gas_used_per_block);
        }
        if !self.maximum_fee_per_gas.is_empty() {
            writer.tag(13, WireType::Len);
            writer.string(&self.maximum_fee_per_gas);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                18 => message.priority_normalizer = reader.string()?,
                26 => message.base_fee_per_gas = reader.string()?,
                34 => message.minimum_fee_per_gas = reader.string()?,
                66 => message
                    .whitelisted_cw_code_hashes_for_delegate_call
                    .push(reader.bytes()?),
                72 => {
                    message.deliver_tx_hook_wasm_gas_limit =
                        json::safe_u64(reader.uint64()?, "deliver_tx_hook_wasm_gas_limit")?
                }
                82 => message.max_dynamic_base_fee_upward_adjustment = reader.string()?,
                90 => message.max_dynamic_base_fee_downward_adjustment = reader.string()?,
                96 => {
                    message.target_gas_used_per_block =
                        json::safe_u64(reader.uint64()?, "target_gas_used_per_block")?
                }
                106 => message.maximum_fee_per_gas = reader.string()?,
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
        if !self.priority_normalizer.is_empty() {
            obj.insert(
                "priority_normalizer".to_string(),
                Value::String(self.priority_normalizer.clone()),
            );
        }
        if !self.base_fee_per_gas.is_empty() {
            obj.insert(
                "base_fee_per_gas".to_string(),
                Value::String(self.base_fee_per_gas.clone()),
            );
        }
        if !self.minimum_fee_per_gas.is_empty() {
            obj.insert(
                "minimum_fee_per_gas".to_string(),
                Value::String(self.minimum_fee_per_gas.clone()),
            );
        }
        if !self.whitelisted_cw_code_hashes_for_delegate_call.is_empty() {
            obj.insert(
                "whitelisted_cw_code_hashes_for_delegate_call".to_string(),
                Value::Array(
                    self.whitelisted_cw_code_hashes_for_delegate_call
                        .iter()
                        .map(|h| Value::String(json::base64_from_bytes(h)))
                        .collect(),
                ),
            );
        }
        if self.deliver_tx_hook_wasm_gas_limit != 0 {
            obj.insert(
                "deliver_tx_hook_wasm_gas_limit".to_string(),
                Value::from(self.deliver_tx_hook_wasm_gas_limit),
            );
        }
        if !self.max_dynamic_base_fee_upward_adjustment.is_empty() {
            obj.insert(
                "max_dynamic_base_fee_upward_adjustment".to_string(),
                Value::String(self.max_dynamic_base_fee_upward_adjustment.clone()),
            );
        }
        if !self.max_dynamic_base_fee_downward_adjustment.is_empty() {
            obj.insert(
                "max_dynamic_base_fee_downward_adjustment".to_string(),
                Value::String(self.max_dynamic_base_fee_downward_adjustment.clone()),
            );
        }
        if self.target_gas_used_per_block != 0 {
            obj.insert(
                "target_gas_used_per_block".to_string(),
                Value::from(self.target_gas_used_per_block),
            );
        }
        if !self.maximum_fee_per_gas.is_empty() {
            obj.insert(
                "maximum_fee_per_gas".to_string(),
                Value::String(self.maximum_fee_per_gas.clone()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            priority_normalizer: json::string_field(value, "priority_normalizer")?,
            base_fee_per_gas: json::string_field(value, "base_fee_per_gas")?,
            minimum_fee_per_gas: json::string_field(value, "minimum_fee_per_gas")?,
            whitelisted_cw_code_hashes_for_delegate_call: json::repeated_field(
                value,
                "whitelisted_cw_code_hashes_for_delegate_call",
                |e| json::bytes_value(e, "whitelisted_cw_code_hashes_for_delegate_call"),
            )?,
            deliver_tx_hook_wasm_gas_limit: json::u64_field(
                value,
                "deliver_tx_hook_wasm_gas_limit",
            )?,
            max_dynamic_base_fee_upward_adjustment: json::string_field(
                value,
                "max_dynamic_base_fee_upward_adjustment",
            )?,
            max_dynamic_base_fee_downward_adjustment: json::string_field(
                value,
                "max_dynamic_base_fee_downward_adjustment",
            )?,
            target_gas_used_per_block: json::u64_field(value, "target_gas_used_per_block")?,
            maximum_fee_per_gas: json::string_field(value, "maximum_fee_per_gas")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            priority_normalizer: partial.priority_normalizer.unwrap_or_default(),
            base_fee_per_gas: partial.base_fee_per_gas.unwrap_or_default(),
            minimum_fee_per_gas: partial.minimum_fee_per_gas.unwrap_or_default(),
            whitelisted_cw_code_hashes_for_delegate_call: partial
                .whitelisted_cw_code_hashes_for_delegate_call
                .unwrap_or_default(),
            deliver_tx_hook_wasm_gas_limit: partial
                .deliver_tx_hook_wasm_gas_limit
                .unwrap_or_default(),
            max_dynamic_base_fee_upward_adjustment: partial
                .max_dynamic_base_fee_upward_adjustment
                .unwrap_or_default(),
            max_dynamic_base_fee_downward_adjustment: partial
                .max_dynamic_base_fee_downward_adjustment
                .unwrap_or_default(),
            target_gas_used_per_block: partial.target_gas_used_per_block.unwrap_or_default(),
            maximum_fee_per_gas: partial.maximum_fee_per_gas.unwrap_or_default(),
        }
    }
}

/// Module parameters before the v5.8.0 fee-market fields were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamsPreV580 {
    pub priority_normalizer: String,
    pub base_fee_per_gas: String,
    pub minimum_fee_per_gas: String,
    pub whitelisted_cw_code_hashes_for_delegate_call: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPreV580Partial {
    pub priority_normalizer: Option<String>,
    pub base_fee_per_gas: Option<String>,
    pub minimum_fee_per_gas: Option<String>,
    pub whitelisted_cw_code_hashes_for_delegate_call: Option<Vec<Vec<u8>>>,
}

impl Message for ParamsPreV580 {
    const TYPE_URL: &'static str = "/seiprotocol.seichain.evm.ParamsPreV580";
    type Partial = ParamsPreV580Partial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.priority_normalizer.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.priority_normalizer);
        }
        if !self.base_fee_per_gas.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.base_fee_per_gas);
        }
        if !self.minimum_fee_per_gas.is_empty() {
            writer.tag(4, WireType::Len);
            writer.string(&self.minimum_fee_per_gas);
        }
        for hash in &self.whitelisted_cw_code_hashes_for_delegate_call {
            writer.tag(8, WireType::Len);
            writer.bytes(hash);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                18 => message.priority_normalizer = reader.string()?,
                26 => message.base_fee_per_gas = reader.string()?,
                34 => message.minimum_fee_per_gas = reader.string()?,
                66 => message
                    .whitelisted_cw_code_hashes_for_delegate_call
                    .push(reader.bytes()?),
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
        if !self.priority_normalizer.is_empty() {
            obj.insert(
                "priority_normalizer".to_string(),
                Value::String(self.priority_normalizer.clone()),
            );
        }
        if !self.base_fee_per_gas.is_empty() {
            obj.insert(
                "base_fee_per_gas".to_string(),
                Value::String(self.base_fee_per_gas.clone()),
            );
        }
        if !self.minimum_fee_per_gas.is_empty() {
            obj.insert(
                "minimum_fee_per_gas".to_string(),
                Value::String(self.minimum_fee_per_gas.clone()),
            );
        }
        if !self.whitelisted_cw_code_hashes_for_delegate_call.is_empty() {
            obj.insert(
                "whitelisted_cw_code_hashes_for_delegate_call".to_string(),
                Value::Array(
                    self.whitelisted_cw_code_hashes_for_delegate_call
                        .iter()
                        .map(|h| Value::String(json::base64_from_bytes(h)))
                        .collect(),
                ),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            priority_normalizer: json::string_field(value, "priority_normalizer")?,
            base_fee_per_gas: json::string_field(value, "base_fee_per_gas")?,
            minimum_fee_per_gas: json::string_field(value, "minimum_fee_per_gas")?,
            whitelisted_cw_code_hashes_for_delegate_call: json::repeated_field(
                value,
                "whitelisted_cw_code_hashes_for_delegate_call",
                |e| json::bytes_value(e, "whitelisted_cw_code_hashes_for_delegate_call"),
            )?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            priority_normalizer: partial.priority_normalizer.unwrap_or_default(),
            base_fee_per_gas: partial.base_fee_per_gas.unwrap_or_default(),
            minimum_fee_per_gas: partial.minimum_fee_per_gas.unwrap_or_default(),
            whitelisted_cw_code_hashes_for_delegate_call: partial
                .whitelisted_cw_code_hashes_for_delegate_call
                .unwrap_or_default(),
        }
    }
}

/// Registry entries for this module's types. No legacy names exist for
/// these; they have no amino converters.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<Params>(),
        RegistryEntry::of::<ParamsPreV580>(),
    ]
}
