// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON precompile: field extraction from JSON payloads inside contracts.

use super::abi::{param, AbiFunction, AbiParam, Address, StateMutability};

/// The address of the JSON precompile contract.
pub const JSON_PRECOMPILE_ADDRESS: Address = Address::precompile(0x1003);

static EXTRACT_INPUTS: [AbiParam; 2] = [
    param("input", "bytes", "bytes"),
    param("key", "string", "string"),
];
static EXTRACT_BYTES_OUTPUTS: [AbiParam; 1] = [param("response", "bytes", "bytes")];
static EXTRACT_BYTES_LIST_OUTPUTS: [AbiParam; 1] = [param("response", "bytes[]", "bytes[]")];
static EXTRACT_UINT256_OUTPUTS: [AbiParam; 1] = [param("response", "uint256", "uint256")];

/// The ABI for the JSON precompile contract.
pub static JSON_PRECOMPILE_ABI: [AbiFunction; 3] = [
    AbiFunction::function(
        "extractAsBytes",
        &EXTRACT_INPUTS,
        &EXTRACT_BYTES_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function(
        "extractAsBytesList",
        &EXTRACT_INPUTS,
        &EXTRACT_BYTES_LIST_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function(
        "extractAsUint256",
        &EXTRACT_INPUTS,
        &EXTRACT_UINT256_OUTPUTS,
        StateMutability::View,
    ),
];
