// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout chaincodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Comprehensive error handling
//! - [`Result`] - Crate-wide result alias

pub mod error;

pub use error::{CodecError, Result};
