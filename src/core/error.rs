// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for chaincodec.
//!
//! Provides error types for codec operations:
//! - Wire format parsing (varints, length prefixes, truncation)
//! - JSON conversion (field shapes, base64, timestamps)
//! - Safe-integer range enforcement
//! - Type registry lookups

use std::fmt;

/// Errors that can occur during encode/decode operations.
///
/// Every variant is fatal to the operation that raised it: a decode either
/// fully succeeds or fails without returning a partial message. Unknown wire
/// fields and unknown JSON keys are not errors; they are skipped silently for
/// forward compatibility.
#[derive(Debug, Clone)]
pub enum CodecError {
    /// Buffer too short for requested read
    Truncated {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Cursor position when error occurred
        position: usize,
    },

    /// Malformed varint (unterminated or longer than 10 bytes)
    InvalidVarint {
        /// Cursor position where the varint started
        position: usize,
    },

    /// Length prefix points past the end of the buffer
    LengthExceeded {
        /// Length that was read
        length: usize,
        /// Position in buffer
        position: usize,
        /// Buffer length
        buffer_len: usize,
    },

    /// 64-bit integer outside the safe interchange range (±(2^53 − 1))
    OutOfRange {
        /// The offending value, stringified
        value: String,
        /// Field or conversion context
        context: String,
    },

    /// Unsupported wire construct (deprecated groups, unknown wire type)
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// JSON value of the wrong shape for a field
    Json {
        /// Field name or conversion context
        context: String,
        /// Error message
        message: String,
    },

    /// Type URL not found in the registry
    TypeNotFound {
        /// Type URL that was looked up
        type_url: String,
    },
}

impl CodecError {
    /// Create a buffer-too-short error.
    pub fn truncated(requested: usize, available: usize, position: usize) -> Self {
        CodecError::Truncated {
            requested,
            available,
            position,
        }
    }

    /// Create a malformed-varint error.
    pub fn invalid_varint(position: usize) -> Self {
        CodecError::InvalidVarint { position }
    }

    /// Create a length-exceeded error.
    pub fn length_exceeded(length: usize, position: usize, buffer_len: usize) -> Self {
        CodecError::LengthExceeded {
            length,
            position,
            buffer_len,
        }
    }

    /// Create a safe-range error.
    pub fn out_of_range(value: impl fmt::Display, context: impl Into<String>) -> Self {
        CodecError::OutOfRange {
            value: value.to_string(),
            context: context.into(),
        }
    }

    /// Create an unsupported-feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create a JSON conversion error.
    pub fn json(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Json {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_url: impl Into<String>) -> Self {
        CodecError::TypeNotFound {
            type_url: type_url.into(),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Truncated {
                requested,
                available,
                position,
            } => write!(
                f,
                "Buffer too short: requested {requested} bytes at position {position}, but only {available} bytes available"
            ),
            CodecError::InvalidVarint { position } => {
                write!(f, "Malformed varint at position {position}")
            }
            CodecError::LengthExceeded {
                length,
                position,
                buffer_len,
            } => write!(
                f,
                "Length {length} exceeds buffer at position {position} (buffer length: {buffer_len})"
            ),
            CodecError::OutOfRange { value, context } => {
                write!(
                    f,
                    "Value {value} is outside the safe integer range in {context}"
                )
            }
            CodecError::Unsupported { feature } => {
                write!(f, "Unsupported feature: '{feature}'")
            }
            CodecError::Json { context, message } => {
                write!(f, "Invalid JSON for {context}: {message}")
            }
            CodecError::TypeNotFound { type_url } => {
                write!(f, "Type not found: '{type_url}'")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for chaincodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_error() {
        let err = CodecError::truncated(8, 3, 12);
        assert!(matches!(err, CodecError::Truncated { .. }));
        assert_eq!(
            err.to_string(),
            "Buffer too short: requested 8 bytes at position 12, but only 3 bytes available"
        );
    }

    #[test]
    fn test_invalid_varint_error() {
        let err = CodecError::invalid_varint(5);
        assert!(matches!(err, CodecError::InvalidVarint { .. }));
        assert_eq!(err.to_string(), "Malformed varint at position 5");
    }

    #[test]
    fn test_length_exceeded_error() {
        let err = CodecError::length_exceeded(1000, 500, 800);
        assert!(matches!(err, CodecError::LengthExceeded { .. }));
        assert_eq!(
            err.to_string(),
            "Length 1000 exceeds buffer at position 500 (buffer length: 800)"
        );
    }

    #[test]
    fn test_out_of_range_error() {
        let err = CodecError::out_of_range(9007199254740993u64, "total_mint_amount");
        assert!(matches!(err, CodecError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "Value 9007199254740993 is outside the safe integer range in total_mint_amount"
        );
    }

    #[test]
    fn test_unsupported_error() {
        let err = CodecError::unsupported("group wire type (deprecated)");
        assert!(matches!(err, CodecError::Unsupported { .. }));
        assert_eq!(
            err.to_string(),
            "Unsupported feature: 'group wire type (deprecated)'"
        );
    }

    #[test]
    fn test_json_error() {
        let err = CodecError::json("granter", "expected a string");
        assert!(matches!(err, CodecError::Json { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid JSON for granter: expected a string"
        );
    }

    #[test]
    fn test_type_not_found_error() {
        let err = CodecError::type_not_found("/cosmos.unknown.v1.Missing");
        assert!(matches!(err, CodecError::TypeNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Type not found: '/cosmos.unknown.v1.Missing'"
        );
    }

    #[test]
    fn test_error_clone() {
        let err1 = CodecError::json("field", "message");
        let err2 = err1.clone();
        assert_eq!(err1.to_string(), err2.to_string());
    }

    #[test]
    fn test_error_debug_format() {
        let err = CodecError::invalid_varint(0);
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidVarint"));
    }
}
