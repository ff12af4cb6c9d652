// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed building blocks for contract ABI tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A fixed 20-byte contract address.
///
/// Displays as `0x`-prefixed lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Build a precompile address: zeros with the given 16-bit suffix.
    pub const fn precompile(suffix: u16) -> Self {
        let mut bytes = [0u8; 20];
        bytes[18] = (suffix >> 8) as u8;
        bytes[19] = (suffix & 0xFF) as u8;
        Self(bytes)
    }

    /// Raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Error returned when parsing an [`Address`] from a hex string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAddressError {
    _private: (),
}

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid address, expected 0x-prefixed 40-digit hex")
    }
}

impl std::error::Error for ParseAddressError {}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).map_err(|_| ParseAddressError { _private: () })?;
        let bytes: [u8; 20] = raw
            .try_into()
            .map_err(|_| ParseAddressError { _private: () })?;
        Ok(Self(bytes))
    }
}

/// Solidity mutability of a contract function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

/// One function parameter: Solidity type plus the declared internal type,
/// with nested components for tuples.
#[derive(Debug, Clone, Serialize)]
pub struct AbiParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "internalType")]
    pub internal_type: &'static str,
    #[serde(skip_serializing_if = "no_components")]
    pub components: &'static [AbiParam],
}

fn no_components(components: &&'static [AbiParam]) -> bool {
    components.is_empty()
}

/// One contract function signature.
#[derive(Debug, Clone, Serialize)]
pub struct AbiFunction {
    pub name: &'static str,
    pub inputs: &'static [AbiParam],
    pub outputs: &'static [AbiParam],
    #[serde(rename = "stateMutability")]
    pub state_mutability: StateMutability,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl AbiFunction {
    /// Construct a `function`-kind entry.
    pub const fn function(
        name: &'static str,
        inputs: &'static [AbiParam],
        outputs: &'static [AbiParam],
        state_mutability: StateMutability,
    ) -> Self {
        Self {
            name,
            inputs,
            outputs,
            state_mutability,
            kind: "function",
        }
    }
}

/// Shorthand for a flat (non-tuple) parameter.
pub const fn param(name: &'static str, kind: &'static str, internal_type: &'static str) -> AbiParam {
    AbiParam {
        name,
        kind,
        internal_type,
        components: &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precompile_address_display() {
        let addr = Address::precompile(0x1001);
        assert_eq!(
            addr.to_string(),
            "0x0000000000000000000000000000000000001001"
        );
        assert_eq!(addr.as_bytes()[18..], [0x10, 0x01]);
    }

    #[test]
    fn test_address_parse_round_trip() {
        let addr = Address::precompile(0x1009);
        let parsed: Address = addr.to_string().parse().unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_address_parse_rejects_bad_input() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("zz".parse::<Address>().is_err());
    }

    #[test]
    fn test_abi_function_serializes_to_standard_json() {
        static INPUTS: [AbiParam; 1] = [param("denom", "string", "string")];
        static OUTPUTS: [AbiParam; 1] = [param("response", "uint8", "uint8")];
        let f = AbiFunction::function("decimals", &INPUTS, &OUTPUTS, StateMutability::View);
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["name"], "decimals");
        assert_eq!(json["type"], "function");
        assert_eq!(json["stateMutability"], "view");
        assert_eq!(json["inputs"][0]["internalType"], "string");
        assert!(json["inputs"][0].get("components").is_none());
    }
}
