// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Static ABI and address constants for the chain's precompiled contracts.
//!
//! These are configuration data for an EVM contract-call library: fixed
//! 20-byte contract addresses and typed function signatures, serializable to
//! the standard JSON ABI format.

pub mod abi;
pub mod bank;
pub mod ibc;
pub mod json;

pub use abi::{AbiFunction, AbiParam, Address, StateMutability};
