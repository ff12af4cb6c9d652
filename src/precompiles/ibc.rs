// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! IBC precompile: cross-chain token transfers.

use super::abi::{param, AbiFunction, AbiParam, Address, StateMutability};

/// The address of the IBC precompile contract.
pub const IBC_PRECOMPILE_ADDRESS: Address = Address::precompile(0x1009);

static TRANSFER_INPUTS: [AbiParam; 9] = [
    param("toAddress", "string", "string"),
    param("port", "string", "string"),
    param("channel", "string", "string"),
    param("denom", "string", "string"),
    param("amount", "uint256", "uint256"),
    param("revisionNumber", "uint64", "uint64"),
    param("revisionHeight", "uint64", "uint64"),
    param("timeoutTimestamp", "uint64", "uint64"),
    param("memo", "string", "string"),
];
static TRANSFER_OUTPUTS: [AbiParam; 1] = [param("success", "bool", "bool")];

static TRANSFER_DEFAULT_TIMEOUT_INPUTS: [AbiParam; 6] = [
    param("toAddress", "string", "string"),
    param("port", "string", "string"),
    param("channel", "string", "string"),
    param("denom", "string", "string"),
    param("amount", "uint256", "uint256"),
    param("memo", "string", "string"),
];
static TRANSFER_DEFAULT_TIMEOUT_OUTPUTS: [AbiParam; 1] = [param("success", "bool", "bool")];

/// The ABI for the IBC precompile contract.
pub static IBC_PRECOMPILE_ABI: [AbiFunction; 2] = [
    AbiFunction::function(
        "transfer",
        &TRANSFER_INPUTS,
        &TRANSFER_OUTPUTS,
        StateMutability::Nonpayable,
    ),
    AbiFunction::function(
        "transferWithDefaultTimeout",
        &TRANSFER_DEFAULT_TIMEOUT_INPUTS,
        &TRANSFER_DEFAULT_TIMEOUT_OUTPUTS,
        StateMutability::Nonpayable,
    ),
];
