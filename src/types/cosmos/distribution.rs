// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Distribution module messages (`cosmos.distribution.v1beta1`).
//!
//! Covers the reward/commission state types and the genesis records that
//! snapshot them.

use serde_json::{Map, Value};

use crate::codec::{json, AminoConverter, Message, RegistryEntry};
use crate::core::Result;
use crate::types::cosmos::base::{DecCoin, DecCoinPartial};
use crate::wire::{WireReader, WireType, WireWriter};

/// Module parameters. Rates are decimal strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pub community_tax: String,
    pub base_proposer_reward: String,
    pub bonus_proposer_reward: String,
    pub withdraw_addr_enabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ParamsPartial {
    pub community_tax: Option<String>,
    pub base_proposer_reward: Option<String>,
    pub bonus_proposer_reward: Option<String>,
    pub withdraw_addr_enabled: Option<bool>,
}

impl Message for Params {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.Params";
    type Partial = ParamsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.community_tax.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.community_tax);
        }
        if !self.base_proposer_reward.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.base_proposer_reward);
        }
        if !self.bonus_proposer_reward.is_empty() {
            writer.tag(3, WireType::Len);
            writer.string(&self.bonus_proposer_reward);
        }
        if self.withdraw_addr_enabled {
            writer.tag(4, WireType::Varint);
            writer.bool(self.withdraw_addr_enabled);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.community_tax = reader.string()?,
                18 => message.base_proposer_reward = reader.string()?,
                26 => message.bonus_proposer_reward = reader.string()?,
                32 => message.withdraw_addr_enabled = reader.bool()?,
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
        if !self.community_tax.is_empty() {
            obj.insert(
                "community_tax".to_string(),
                Value::String(self.community_tax.clone()),
            );
        }
        if !self.base_proposer_reward.is_empty() {
            obj.insert(
                "base_proposer_reward".to_string(),
                Value::String(self.base_proposer_reward.clone()),
            );
        }
        if !self.bonus_proposer_reward.is_empty() {
            obj.insert(
                "bonus_proposer_reward".to_string(),
                Value::String(self.bonus_proposer_reward.clone()),
            );
        }
        if self.withdraw_addr_enabled {
            obj.insert(
                "withdraw_addr_enabled".to_string(),
                Value::Bool(self.withdraw_addr_enabled),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            community_tax: json::string_field(value, "community_tax")?,
            base_proposer_reward: json::string_field(value, "base_proposer_reward")?,
            bonus_proposer_reward: json::string_field(value, "bonus_proposer_reward")?,
            withdraw_addr_enabled: json::bool_field(value, "withdraw_addr_enabled")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            community_tax: partial.community_tax.unwrap_or_default(),
            base_proposer_reward: partial.base_proposer_reward.unwrap_or_default(),
            bonus_proposer_reward: partial.bonus_proposer_reward.unwrap_or_default(),
            withdraw_addr_enabled: partial.withdraw_addr_enabled.unwrap_or_default(),
        }
    }
}

/// Community pool funds not yet distributed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeePool {
    pub community_pool: Vec<DecCoin>,
}

#[derive(Debug, Clone, Default)]
pub struct FeePoolPartial {
    pub community_pool: Option<Vec<DecCoinPartial>>,
}

impl Message for FeePool {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.FeePool";
    type Partial = FeePoolPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for coin in &self.community_pool {
            writer.tag(1, WireType::Len);
            writer.fork();
            coin.encode_raw(writer);
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
                        .community_pool
                        .push(DecCoin::decode_raw(reader, inner)?);
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
        if !self.community_pool.is_empty() {
            obj.insert(
                "community_pool".to_string(),
                Value::Array(self.community_pool.iter().map(DecCoin::to_json).collect()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            community_pool: json::repeated_field(value, "community_pool", DecCoin::from_json)?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            community_pool: partial
                .community_pool
                .unwrap_or_default()
                .into_iter()
                .map(DecCoin::from_partial)
                .collect(),
        }
    }
}

/// Historical reward ratio for a validator period, reference-counted by the
/// delegations still pointing at it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorHistoricalRewards {
    pub cumulative_reward_ratio: Vec<DecCoin>,
    pub reference_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorHistoricalRewardsPartial {
    pub cumulative_reward_ratio: Option<Vec<DecCoinPartial>>,
    pub reference_count: Option<u32>,
}

impl Message for ValidatorHistoricalRewards {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorHistoricalRewards";
    type Partial = ValidatorHistoricalRewardsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for coin in &self.cumulative_reward_ratio {
            writer.tag(1, WireType::Len);
            writer.fork();
            coin.encode_raw(writer);
            writer.join();
        }
        if self.reference_count != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint32(self.reference_count);
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
                        .cumulative_reward_ratio
                        .push(DecCoin::decode_raw(reader, inner)?);
                }
                16 => message.reference_count = reader.uint32()?,
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
        if !self.cumulative_reward_ratio.is_empty() {
            obj.insert(
                "cumulative_reward_ratio".to_string(),
                Value::Array(
                    self.cumulative_reward_ratio
                        .iter()
                        .map(DecCoin::to_json)
                        .collect(),
                ),
            );
        }
        if self.reference_count != 0 {
            obj.insert(
                "reference_count".to_string(),
                Value::from(self.reference_count),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            cumulative_reward_ratio: json::repeated_field(
                value,
                "cumulative_reward_ratio",
                DecCoin::from_json,
            )?,
            reference_count: json::u32_field(value, "reference_count")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            cumulative_reward_ratio: partial
                .cumulative_reward_ratio
                .unwrap_or_default()
                .into_iter()
                .map(DecCoin::from_partial)
                .collect(),
            reference_count: partial.reference_count.unwrap_or_default(),
        }
    }
}

/// Rewards accumulated in the current validator period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorCurrentRewards {
    pub rewards: Vec<DecCoin>,
    pub period: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorCurrentRewardsPartial {
    pub rewards: Option<Vec<DecCoinPartial>>,
    pub period: Option<u64>,
}

impl Message for ValidatorCurrentRewards {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorCurrentRewards";
    type Partial = ValidatorCurrentRewardsPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for coin in &self.rewards {
            writer.tag(1, WireType::Len);
            writer.fork();
            coin.encode_raw(writer);
            writer.join();
        }
        if self.period != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint64(self.period);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => {
                    let inner = reader.delimited_end()?;
                    message.rewards.push(DecCoin::decode_raw(reader, inner)?);
                }
                16 => message.period = json::safe_u64(reader.uint64()?, "period")?,
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
        if !self.rewards.is_empty() {
            obj.insert(
                "rewards".to_string(),
                Value::Array(self.rewards.iter().map(DecCoin::to_json).collect()),
            );
        }
        if self.period != 0 {
            obj.insert("period".to_string(), Value::from(self.period));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            rewards: json::repeated_field(value, "rewards", DecCoin::from_json)?,
            period: json::u64_field(value, "period")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            rewards: partial
                .rewards
                .unwrap_or_default()
                .into_iter()
                .map(DecCoin::from_partial)
                .collect(),
            period: partial.period.unwrap_or_default(),
        }
    }
}

/// Commission accumulated by a validator, pending withdrawal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorAccumulatedCommission {
    pub commission: Vec<DecCoin>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorAccumulatedCommissionPartial {
    pub commission: Option<Vec<DecCoinPartial>>,
}

impl Message for ValidatorAccumulatedCommission {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorAccumulatedCommission";
    type Partial = ValidatorAccumulatedCommissionPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        for coin in &self.commission {
            writer.tag(1, WireType::Len);
            writer.fork();
            coin.encode_raw(writer);
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
                    message.commission.push(DecCoin::decode_raw(reader, inner)?);
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
        if !self.commission.is_empty() {
            obj.insert(
                "commission".to_string(),
                Value::Array(self.commission.iter().map(DecCoin::to_json).collect()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            commission: json::repeated_field(value, "commission", DecCoin::from_json)?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            commission: partial
                .commission
                .unwrap_or_default()
                .into_iter()
                .map(DecCoin::from_partial)
                .collect(),
        }
    }
}

/// A slash applied to a validator at a given period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorSlashEvent {
    pub validator_period: u64,
    pub fraction: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorSlashEventPartial {
    pub validator_period: Option<u64>,
    pub fraction: Option<String>,
}

impl Message for ValidatorSlashEvent {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorSlashEvent";
    type Partial = ValidatorSlashEventPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if self.validator_period != 0 {
            writer.tag(1, WireType::Varint);
            writer.uint64(self.validator_period);
        }
        if !self.fraction.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.fraction);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                8 => {
                    message.validator_period =
                        json::safe_u64(reader.uint64()?, "validator_period")?
                }
                18 => message.fraction = reader.string()?,
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
        if self.validator_period != 0 {
            obj.insert(
                "validator_period".to_string(),
                Value::from(self.validator_period),
            );
        }
        if !self.fraction.is_empty() {
            obj.insert("fraction".to_string(), Value::String(self.fraction.clone()));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_period: json::u64_field(value, "validator_period")?,
            fraction: json::string_field(value, "fraction")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_period: partial.validator_period.unwrap_or_default(),
            fraction: partial.fraction.unwrap_or_default(),
        }
    }
}

/// The starting point of a delegation for reward calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelegatorStartingInfo {
    pub previous_period: u64,
    pub stake: String,
    pub height: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DelegatorStartingInfoPartial {
    pub previous_period: Option<u64>,
    pub stake: Option<String>,
    pub height: Option<u64>,
}

impl Message for DelegatorStartingInfo {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.DelegatorStartingInfo";
    type Partial = DelegatorStartingInfoPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if self.previous_period != 0 {
            writer.tag(1, WireType::Varint);
            writer.uint64(self.previous_period);
        }
        if !self.stake.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.stake);
        }
        if self.height != 0 {
            writer.tag(3, WireType::Varint);
            writer.uint64(self.height);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                8 => message.previous_period = json::safe_u64(reader.uint64()?, "previous_period")?,
                18 => message.stake = reader.string()?,
                24 => message.height = json::safe_u64(reader.uint64()?, "height")?,
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
        if self.previous_period != 0 {
            obj.insert(
                "previous_period".to_string(),
                Value::from(self.previous_period),
            );
        }
        if !self.stake.is_empty() {
            obj.insert("stake".to_string(), Value::String(self.stake.clone()));
        }
        if self.height != 0 {
            obj.insert("height".to_string(), Value::from(self.height));
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            previous_period: json::u64_field(value, "previous_period")?,
            stake: json::string_field(value, "stake")?,
            height: json::u64_field(value, "height")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            previous_period: partial.previous_period.unwrap_or_default(),
            stake: partial.stake.unwrap_or_default(),
            height: partial.height.unwrap_or_default(),
        }
    }
}

/// A delegator's configured withdraw address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelegatorWithdrawInfo {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, Default)]
pub struct DelegatorWithdrawInfoPartial {
    pub delegator_address: Option<String>,
    pub withdraw_address: Option<String>,
}

impl Message for DelegatorWithdrawInfo {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.DelegatorWithdrawInfo";
    type Partial = DelegatorWithdrawInfoPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.delegator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.delegator_address);
        }
        if !self.withdraw_address.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.withdraw_address);
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.delegator_address = reader.string()?,
                18 => message.withdraw_address = reader.string()?,
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
        if !self.delegator_address.is_empty() {
            obj.insert(
                "delegator_address".to_string(),
                Value::String(self.delegator_address.clone()),
            );
        }
        if !self.withdraw_address.is_empty() {
            obj.insert(
                "withdraw_address".to_string(),
                Value::String(self.withdraw_address.clone()),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            delegator_address: json::string_field(value, "delegator_address")?,
            withdraw_address: json::string_field(value, "withdraw_address")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            delegator_address: partial.delegator_address.unwrap_or_default(),
            withdraw_address: partial.withdraw_address.unwrap_or_default(),
        }
    }
}

/// Outstanding (unwithdrawn) rewards of a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorOutstandingRewardsRecord {
    pub validator_address: String,
    pub outstanding_rewards: Vec<DecCoin>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorOutstandingRewardsRecordPartial {
    pub validator_address: Option<String>,
    pub outstanding_rewards: Option<Vec<DecCoinPartial>>,
}

impl Message for ValidatorOutstandingRewardsRecord {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorOutstandingRewardsRecord";
    type Partial = ValidatorOutstandingRewardsRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.validator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.validator_address);
        }
        for coin in &self.outstanding_rewards {
            writer.tag(2, WireType::Len);
            writer.fork();
            coin.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.validator_address = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message
                        .outstanding_rewards
                        .push(DecCoin::decode_raw(reader, inner)?);
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
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if !self.outstanding_rewards.is_empty() {
            obj.insert(
                "outstanding_rewards".to_string(),
                Value::Array(
                    self.outstanding_rewards
                        .iter()
                        .map(DecCoin::to_json)
                        .collect(),
                ),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_address: json::string_field(value, "validator_address")?,
            outstanding_rewards: json::repeated_field(
                value,
                "outstanding_rewards",
                DecCoin::from_json,
            )?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_address: partial.validator_address.unwrap_or_default(),
            outstanding_rewards: partial
                .outstanding_rewards
                .unwrap_or_default()
                .into_iter()
                .map(DecCoin::from_partial)
                .collect(),
        }
    }
}

/// Accumulated commission of a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorAccumulatedCommissionRecord {
    pub validator_address: String,
    pub accumulated: Option<ValidatorAccumulatedCommission>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorAccumulatedCommissionRecordPartial {
    pub validator_address: Option<String>,
    pub accumulated: Option<ValidatorAccumulatedCommissionPartial>,
}

impl Message for ValidatorAccumulatedCommissionRecord {
    const TYPE_URL: &'static str =
        "/cosmos.distribution.v1beta1.ValidatorAccumulatedCommissionRecord";
    type Partial = ValidatorAccumulatedCommissionRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.validator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.validator_address);
        }
        if let Some(accumulated) = &self.accumulated {
            writer.tag(2, WireType::Len);
            writer.fork();
            accumulated.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.validator_address = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message.accumulated = Some(ValidatorAccumulatedCommission::decode_raw(
                        reader, inner,
                    )?);
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
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if let Some(accumulated) = &self.accumulated {
            obj.insert("accumulated".to_string(), accumulated.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_address: json::string_field(value, "validator_address")?,
            accumulated: json::message_field(value, "accumulated")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_address: partial.validator_address.unwrap_or_default(),
            accumulated: partial
                .accumulated
                .map(ValidatorAccumulatedCommission::from_partial),
        }
    }
}

/// Historical rewards of a validator for one period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorHistoricalRewardsRecord {
    pub validator_address: String,
    pub period: u64,
    pub rewards: Option<ValidatorHistoricalRewards>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorHistoricalRewardsRecordPartial {
    pub validator_address: Option<String>,
    pub period: Option<u64>,
    pub rewards: Option<ValidatorHistoricalRewardsPartial>,
}

impl Message for ValidatorHistoricalRewardsRecord {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorHistoricalRewardsRecord";
    type Partial = ValidatorHistoricalRewardsRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.validator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.validator_address);
        }
        if self.period != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint64(self.period);
        }
        if let Some(rewards) = &self.rewards {
            writer.tag(3, WireType::Len);
            writer.fork();
            rewards.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.validator_address = reader.string()?,
                16 => message.period = json::safe_u64(reader.uint64()?, "period")?,
                26 => {
                    let inner = reader.delimited_end()?;
                    message.rewards =
                        Some(ValidatorHistoricalRewards::decode_raw(reader, inner)?);
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
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if self.period != 0 {
            obj.insert("period".to_string(), Value::from(self.period));
        }
        if let Some(rewards) = &self.rewards {
            obj.insert("rewards".to_string(), rewards.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_address: json::string_field(value, "validator_address")?,
            period: json::u64_field(value, "period")?,
            rewards: json::message_field(value, "rewards")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_address: partial.validator_address.unwrap_or_default(),
            period: partial.period.unwrap_or_default(),
            rewards: partial.rewards.map(ValidatorHistoricalRewards::from_partial),
        }
    }
}

/// Current rewards of a validator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorCurrentRewardsRecord {
    pub validator_address: String,
    pub rewards: Option<ValidatorCurrentRewards>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorCurrentRewardsRecordPartial {
    pub validator_address: Option<String>,
    pub rewards: Option<ValidatorCurrentRewardsPartial>,
}

impl Message for ValidatorCurrentRewardsRecord {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorCurrentRewardsRecord";
    type Partial = ValidatorCurrentRewardsRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.validator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.validator_address);
        }
        if let Some(rewards) = &self.rewards {
            writer.tag(2, WireType::Len);
            writer.fork();
            rewards.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.validator_address = reader.string()?,
                18 => {
                    let inner = reader.delimited_end()?;
                    message.rewards = Some(ValidatorCurrentRewards::decode_raw(reader, inner)?);
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
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if let Some(rewards) = &self.rewards {
            obj.insert("rewards".to_string(), rewards.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_address: json::string_field(value, "validator_address")?,
            rewards: json::message_field(value, "rewards")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_address: partial.validator_address.unwrap_or_default(),
            rewards: partial.rewards.map(ValidatorCurrentRewards::from_partial),
        }
    }
}

/// Starting info of one delegation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelegatorStartingInfoRecord {
    pub delegator_address: String,
    pub validator_address: String,
    pub starting_info: Option<DelegatorStartingInfo>,
}

#[derive(Debug, Clone, Default)]
pub struct DelegatorStartingInfoRecordPartial {
    pub delegator_address: Option<String>,
    pub validator_address: Option<String>,
    pub starting_info: Option<DelegatorStartingInfoPartial>,
}

impl Message for DelegatorStartingInfoRecord {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.DelegatorStartingInfoRecord";
    type Partial = DelegatorStartingInfoRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.delegator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.delegator_address);
        }
        if !self.validator_address.is_empty() {
            writer.tag(2, WireType::Len);
            writer.string(&self.validator_address);
        }
        if let Some(starting_info) = &self.starting_info {
            writer.tag(3, WireType::Len);
            writer.fork();
            starting_info.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.delegator_address = reader.string()?,
                18 => message.validator_address = reader.string()?,
                26 => {
                    let inner = reader.delimited_end()?;
                    message.starting_info =
                        Some(DelegatorStartingInfo::decode_raw(reader, inner)?);
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
        if !self.delegator_address.is_empty() {
            obj.insert(
                "delegator_address".to_string(),
                Value::String(self.delegator_address.clone()),
            );
        }
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if let Some(starting_info) = &self.starting_info {
            obj.insert("starting_info".to_string(), starting_info.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            delegator_address: json::string_field(value, "delegator_address")?,
            validator_address: json::string_field(value, "validator_address")?,
            starting_info: json::message_field(value, "starting_info")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            delegator_address: partial.delegator_address.unwrap_or_default(),
            validator_address: partial.validator_address.unwrap_or_default(),
            starting_info: partial.starting_info.map(DelegatorStartingInfo::from_partial),
        }
    }
}

/// A slash event of a validator at a given height and period.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorSlashEventRecord {
    pub validator_address: String,
    pub height: u64,
    pub period: u64,
    pub validator_slash_event: Option<ValidatorSlashEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorSlashEventRecordPartial {
    pub validator_address: Option<String>,
    pub height: Option<u64>,
    pub period: Option<u64>,
    pub validator_slash_event: Option<ValidatorSlashEventPartial>,
}

impl Message for ValidatorSlashEventRecord {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.ValidatorSlashEventRecord";
    type Partial = ValidatorSlashEventRecordPartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if !self.validator_address.is_empty() {
            writer.tag(1, WireType::Len);
            writer.string(&self.validator_address);
        }
        if self.height != 0 {
            writer.tag(2, WireType::Varint);
            writer.uint64(self.height);
        }
        if self.period != 0 {
            writer.tag(3, WireType::Varint);
            writer.uint64(self.period);
        }
        if let Some(event) = &self.validator_slash_event {
            writer.tag(4, WireType::Len);
            writer.fork();
            event.encode_raw(writer);
            writer.join();
        }
    }

    fn decode_raw(reader: &mut WireReader<'_>, end: usize) -> Result<Self> {
        let mut message = Self::default();
        while reader.pos() < end {
            let tag = reader.uint32()?;
            match tag {
                10 => message.validator_address = reader.string()?,
                16 => message.height = json::safe_u64(reader.uint64()?, "height")?,
                24 => message.period = json::safe_u64(reader.uint64()?, "period")?,
                34 => {
                    let inner = reader.delimited_end()?;
                    message.validator_slash_event =
                        Some(ValidatorSlashEvent::decode_raw(reader, inner)?);
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
        if !self.validator_address.is_empty() {
            obj.insert(
                "validator_address".to_string(),
                Value::String(self.validator_address.clone()),
            );
        }
        if self.height != 0 {
            obj.insert("height".to_string(), Value::from(self.height));
        }
        if self.period != 0 {
            obj.insert("period".to_string(), Value::from(self.period));
        }
        if let Some(event) = &self.validator_slash_event {
            obj.insert("validator_slash_event".to_string(), event.to_json());
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            validator_address: json::string_field(value, "validator_address")?,
            height: json::u64_field(value, "height")?,
            period: json::u64_field(value, "period")?,
            validator_slash_event: json::message_field(value, "validator_slash_event")?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            validator_address: partial.validator_address.unwrap_or_default(),
            height: partial.height.unwrap_or_default(),
            period: partial.period.unwrap_or_default(),
            validator_slash_event: partial
                .validator_slash_event
                .map(ValidatorSlashEvent::from_partial),
        }
    }
}

/// Full distribution module state at genesis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenesisState {
    pub params: Option<Params>,
    pub fee_pool: Option<FeePool>,
    pub delegator_withdraw_infos: Vec<DelegatorWithdrawInfo>,
    pub previous_proposer: String,
    pub outstanding_rewards: Vec<ValidatorOutstandingRewardsRecord>,
    pub validator_accumulated_commissions: Vec<ValidatorAccumulatedCommissionRecord>,
    pub validator_historical_rewards: Vec<ValidatorHistoricalRewardsRecord>,
    pub validator_current_rewards: Vec<ValidatorCurrentRewardsRecord>,
    pub delegator_starting_infos: Vec<DelegatorStartingInfoRecord>,
    pub validator_slash_events: Vec<ValidatorSlashEventRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct GenesisStatePartial {
    pub params: Option<ParamsPartial>,
    pub fee_pool: Option<FeePoolPartial>,
    pub delegator_withdraw_infos: Option<Vec<DelegatorWithdrawInfoPartial>>,
    pub previous_proposer: Option<String>,
    pub outstanding_rewards: Option<Vec<ValidatorOutstandingRewardsRecordPartial>>,
    pub validator_accumulated_commissions:
        Option<Vec<ValidatorAccumulatedCommissionRecordPartial>>,
    pub validator_historical_rewards: Option<Vec<ValidatorHistoricalRewardsRecordPartial>>,
    pub validator_current_rewards: Option<Vec<ValidatorCurrentRewardsRecordPartial>>,
    pub delegator_starting_infos: Option<Vec<DelegatorStartingInfoRecordPartial>>,
    pub validator_slash_events: Option<Vec<ValidatorSlashEventRecordPartial>>,
}

impl Message for GenesisState {
    const TYPE_URL: &'static str = "/cosmos.distribution.v1beta1.GenesisState";
    type Partial = GenesisStatePartial;

    fn encode_raw(&self, writer: &mut WireWriter) {
        if let Some(params) = &self.params {
            writer.tag(1, WireType::Len);
            writer.fork();
            params.encode_raw(writer);
            writer.join();
        }
        if let Some(fee_pool) = &self.fee_pool {
            writer.tag(2, WireType::Len);
            writer.fork();
            fee_pool.encode_raw(writer);
            writer.join();
        }
        for info in &self.delegator_withdraw_infos {
            writer.tag(3, WireType::Len);
            writer.fork();
            info.encode_raw(writer);
            writer.join();
        }
        if !self.previous_proposer.is_empty() {
            writer.tag(4, WireType::Len);
            writer.string(&self.previous_proposer);
        }
        for record in &self.outstanding_rewards {
            writer.tag(5, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
            writer.join();
        }
        for record in &self.validator_accumulated_commissions {
            writer.tag(6, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
            writer.join();
        }
        for record in &self.validator_historical_rewards {
            writer.tag(7, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
            writer.join();
        }
        for record in &self.validator_current_rewards {
            writer.tag(8, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
            writer.join();
        }
        for record in &self.delegator_starting_infos {
            writer.tag(9, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
            writer.join();
        }
        for record in &self.validator_slash_events {
            writer.tag(10, WireType::Len);
            writer.fork();
            record.encode_raw(writer);
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
                18 => {
                    let inner = reader.delimited_end()?;
                    message.fee_pool = Some(FeePool::decode_raw(reader, inner)?);
                }
                26 => {
                    let inner = reader.delimited_end()?;
                    message
                        .delegator_withdraw_infos
                        .push(DelegatorWithdrawInfo::decode_raw(reader, inner)?);
                }
                34 => message.previous_proposer = reader.string()?,
                42 => {
                    let inner = reader.delimited_end()?;
                    message
                        .outstanding_rewards
                        .push(ValidatorOutstandingRewardsRecord::decode_raw(reader, inner)?);
                }
                50 => {
                    let inner = reader.delimited_end()?;
                    message.validator_accumulated_commissions.push(
                        ValidatorAccumulatedCommissionRecord::decode_raw(reader, inner)?,
                    );
                }
                58 => {
                    let inner = reader.delimited_end()?;
                    message
                        .validator_historical_rewards
                        .push(ValidatorHistoricalRewardsRecord::decode_raw(reader, inner)?);
                }
                66 => {
                    let inner = reader.delimited_end()?;
                    message
                        .validator_current_rewards
                        .push(ValidatorCurrentRewardsRecord::decode_raw(reader, inner)?);
                }
                74 => {
                    let inner = reader.delimited_end()?;
                    message
                        .delegator_starting_infos
                        .push(DelegatorStartingInfoRecord::decode_raw(reader, inner)?);
                }
                82 => {
                    let inner = reader.delimited_end()?;
                    message
                        .validator_slash_events
                        .push(ValidatorSlashEventRecord::decode_raw(reader, inner)?);
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
        if let Some(fee_pool) = &self.fee_pool {
            obj.insert("fee_pool".to_string(), fee_pool.to_json());
        }
        if !self.delegator_withdraw_infos.is_empty() {
            obj.insert(
                "delegator_withdraw_infos".to_string(),
                Value::Array(
                    self.delegator_withdraw_infos
                        .iter()
                        .map(DelegatorWithdrawInfo::to_json)
                        .collect(),
                ),
            );
        }
        if !self.previous_proposer.is_empty() {
            obj.insert(
                "previous_proposer".to_string(),
                Value::String(self.previous_proposer.clone()),
            );
        }
        if !self.outstanding_rewards.is_empty() {
            obj.insert(
                "outstanding_rewards".to_string(),
                Value::Array(
                    self.outstanding_rewards
                        .iter()
                        .map(ValidatorOutstandingRewardsRecord::to_json)
                        .collect(),
                ),
            );
        }
        if !self.validator_accumulated_commissions.is_empty() {
            obj.insert(
                "validator_accumulated_commissions".to_string(),
                Value::Array(
                    self.validator_accumulated_commissions
                        .iter()
                        .map(ValidatorAccumulatedCommissionRecord::to_json)
                        .collect(),
                ),
            );
        }
        if !self.validator_historical_rewards.is_empty() {
            obj.insert(
                "validator_historical_rewards".to_string(),
                Value::Array(
                    self.validator_historical_rewards
                        .iter()
                        .map(ValidatorHistoricalRewardsRecord::to_json)
                        .collect(),
                ),
            );
        }
        if !self.validator_current_rewards.is_empty() {
            obj.insert(
                "validator_current_rewards".to_string(),
                Value::Array(
                    self.validator_current_rewards
                        .iter()
                        .map(ValidatorCurrentRewardsRecord::to_json)
                        .collect(),
                ),
            );
        }
        if !self.delegator_starting_infos.is_empty() {
            obj.insert(
                "delegator_starting_infos".to_string(),
                Value::Array(
                    self.delegator_starting_infos
                        .iter()
                        .map(DelegatorStartingInfoRecord::to_json)
                        .collect(),
                ),
            );
        }
        if !self.validator_slash_events.is_empty() {
            obj.insert(
                "validator_slash_events".to_string(),
                Value::Array(
                    self.validator_slash_events
                        .iter()
                        .map(ValidatorSlashEventRecord::to_json)
                        .collect(),
                ),
            );
        }
        Value::Object(obj)
    }

    fn from_json(value: &Value) -> Result<Self> {
        Ok(Self {
            params: json::message_field(value, "params")?,
            fee_pool: json::message_field(value, "fee_pool")?,
            delegator_withdraw_infos: json::repeated_field(
                value,
                "delegator_withdraw_infos",
                DelegatorWithdrawInfo::from_json,
            )?,
            previous_proposer: json::string_field(value, "previous_proposer")?,
            outstanding_rewards: json::repeated_field(
                value,
                "outstanding_rewards",
                ValidatorOutstandingRewardsRecord::from_json,
            )?,
            validator_accumulated_commissions: json::repeated_field(
                value,
                "validator_accumulated_commissions",
                ValidatorAccumulatedCommissionRecord::from_json,
            )?,
            validator_historical_rewards: json::repeated_field(
                value,
                "validator_historical_rewards",
                ValidatorHistoricalRewardsRecord::from_json,
            )?,
            validator_current_rewards: json::repeated_field(
                value,
                "validator_current_rewards",
                ValidatorCurrentRewardsRecord::from_json,
            )?,
            delegator_starting_infos: json::repeated_field(
                value,
                "delegator_starting_infos",
                DelegatorStartingInfoRecord::from_json,
            )?,
            validator_slash_events: json::repeated_field(
                value,
                "validator_slash_events",
                ValidatorSlashEventRecord::from_json,
            )?,
        })
    }

    fn from_partial(partial: Self::Partial) -> Self {
        Self {
            params: partial.params.map(Params::from_partial),
            fee_pool: partial.fee_pool.map(FeePool::from_partial),
            delegator_withdraw_infos: partial
                .delegator_withdraw_infos
                .unwrap_or_default()
                .into_iter()
                .map(DelegatorWithdrawInfo::from_partial)
                .collect(),
            previous_proposer: partial.previous_proposer.unwrap_or_default(),
            outstanding_rewards: partial
                .outstanding_rewards
                .unwrap_or_default()
                .into_iter()
                .map(ValidatorOutstandingRewardsRecord::from_partial)
                .collect(),
            validator_accumulated_commissions: partial
                .validator_accumulated_commissions
                .unwrap_or_default()
                .into_iter()
                .map(ValidatorAccumulatedCommissionRecord::from_partial)
                .collect(),
            validator_historical_rewards: partial
                .validator_historical_rewards
                .unwrap_or_default()
                .into_iter()
                .map(ValidatorHistoricalRewardsRecord::from_partial)
                .collect(),
            validator_current_rewards: partial
                .validator_current_rewards
                .unwrap_or_default()
                .into_iter()
                .map(ValidatorCurrentRewardsRecord::from_partial)
                .collect(),
            delegator_starting_infos: partial
                .delegator_starting_infos
                .unwrap_or_default()
                .into_iter()
                .map(DelegatorStartingInfoRecord::from_partial)
                .collect(),
            validator_slash_events: partial
                .validator_slash_events
                .unwrap_or_default()
                .into_iter()
                .map(ValidatorSlashEventRecord::from_partial)
                .collect(),
        }
    }
}

/// Registry entries for this module's genesis record types.
pub fn registry_entries() -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::of::<DelegatorWithdrawInfo>(),
        RegistryEntry::of::<ValidatorOutstandingRewardsRecord>(),
        RegistryEntry::of::<ValidatorAccumulatedCommissionRecord>(),
        RegistryEntry::of::<ValidatorHistoricalRewardsRecord>(),
        RegistryEntry::of::<ValidatorCurrentRewardsRecord>(),
        RegistryEntry::of::<DelegatorStartingInfoRecord>(),
        RegistryEntry::of::<ValidatorSlashEventRecord>(),
        RegistryEntry::of::<GenesisState>(),
    ]
}

/// Legacy converters for this module's genesis record types.
pub fn amino_converters() -> Vec<AminoConverter> {
    vec![
        AminoConverter::passthrough(
            DelegatorWithdrawInfo::TYPE_URL,
            "cosmos-sdk/DelegatorWithdrawInfo",
        ),
        AminoConverter::passthrough(
            ValidatorOutstandingRewardsRecord::TYPE_URL,
            "cosmos-sdk/ValidatorOutstandingRewardsRecord",
        ),
        AminoConverter::passthrough(
            ValidatorAccumulatedCommissionRecord::TYPE_URL,
            "cosmos-sdk/ValidatorAccumulatedCommissionRecord",
        ),
        AminoConverter::passthrough(
            ValidatorHistoricalRewardsRecord::TYPE_URL,
            "cosmos-sdk/ValidatorHistoricalRewardsRecord",
        ),
        AminoConverter::passthrough(
            ValidatorCurrentRewardsRecord::TYPE_URL,
            "cosmos-sdk/ValidatorCurrentRewardsRecord",
        ),
        AminoConverter::passthrough(
            DelegatorStartingInfoRecord::TYPE_URL,
            "cosmos-sdk/DelegatorStartingInfoRecord",
        ),
        AminoConverter::passthrough(
            ValidatorSlashEventRecord::TYPE_URL,
            "cosmos-sdk/ValidatorSlashEventRecord",
        ),
        AminoConverter::passthrough(GenesisState::TYPE_URL, "cosmos-sdk/GenesisState"),
    ]
}
