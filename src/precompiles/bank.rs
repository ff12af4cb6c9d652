// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bank precompile: native token balances, transfers, and denom metadata.

use super::abi::{param, AbiFunction, AbiParam, Address, StateMutability};

/// The address of the bank precompile contract.
pub const BANK_PRECOMPILE_ADDRESS: Address = Address::precompile(0x1001);

static COIN_COMPONENTS: [AbiParam; 2] = [
    param("amount", "uint256", "uint256"),
    param("denom", "string", "string"),
];

static ALL_BALANCES_INPUTS: [AbiParam; 1] = [param("acc", "address", "address")];
static ALL_BALANCES_OUTPUTS: [AbiParam; 1] = [AbiParam {
    name: "response",
    kind: "tuple[]",
    internal_type: "struct IBank.Coin[]",
    components: &COIN_COMPONENTS,
}];

static BALANCE_INPUTS: [AbiParam; 2] = [
    param("acc", "address", "address"),
    param("denom", "string", "string"),
];
static BALANCE_OUTPUTS: [AbiParam; 1] = [param("amount", "uint256", "uint256")];

static DENOM_INPUTS: [AbiParam; 1] = [param("denom", "string", "string")];
static DECIMALS_OUTPUTS: [AbiParam; 1] = [param("response", "uint8", "uint8")];
static NAME_OUTPUTS: [AbiParam; 1] = [param("response", "string", "string")];
static SUPPLY_OUTPUTS: [AbiParam; 1] = [param("response", "uint256", "uint256")];
static SYMBOL_OUTPUTS: [AbiParam; 1] = [param("response", "string", "string")];

static SEND_INPUTS: [AbiParam; 4] = [
    param("fromAddress", "address", "address"),
    param("toAddress", "address", "address"),
    param("denom", "string", "string"),
    param("amount", "uint256", "uint256"),
];
static SEND_OUTPUTS: [AbiParam; 1] = [param("success", "bool", "bool")];

static SEND_NATIVE_INPUTS: [AbiParam; 1] = [param("toNativeAddress", "string", "string")];
static SEND_NATIVE_OUTPUTS: [AbiParam; 1] = [param("success", "bool", "bool")];

/// The ABI for the bank precompile contract.
pub static BANK_PRECOMPILE_ABI: [AbiFunction; 8] = [
    AbiFunction::function(
        "all_balances",
        &ALL_BALANCES_INPUTS,
        &ALL_BALANCES_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function(
        "balance",
        &BALANCE_INPUTS,
        &BALANCE_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function(
        "decimals",
        &DENOM_INPUTS,
        &DECIMALS_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function("name", &DENOM_INPUTS, &NAME_OUTPUTS, StateMutability::View),
    AbiFunction::function(
        "send",
        &SEND_INPUTS,
        &SEND_OUTPUTS,
        StateMutability::Nonpayable,
    ),
    AbiFunction::function(
        "sendNative",
        &SEND_NATIVE_INPUTS,
        &SEND_NATIVE_OUTPUTS,
        StateMutability::Payable,
    ),
    AbiFunction::function(
        "supply",
        &DENOM_INPUTS,
        &SUPPLY_OUTPUTS,
        StateMutability::View,
    ),
    AbiFunction::function(
        "symbol",
        &DENOM_INPUTS,
        &SYMBOL_OUTPUTS,
        StateMutability::View,
    ),
];
