// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Shared JSON conversion helpers.
//!
//! The canonical JSON mapping keeps field names in snake_case exactly as
//! declared, omits default-valued fields, serializes bytes as base64 text,
//! and represents 64-bit integers as JSON numbers bounded by the safe
//! interchange range ±(2^53 − 1). These helpers implement the per-field
//! rules; message codecs compose them.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;

use crate::core::{CodecError, Result};

use super::Message;

/// Largest integer magnitude that survives a round trip through a JSON
/// number in every consumer (2^53 − 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Look up a field, treating `null` the same as absent.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

/// Read a string field; absent resolves to the empty string.
pub fn string_field(value: &Value, key: &str) -> Result<String> {
    match field(value, key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(CodecError::json(key, format!("expected a string, got {other}"))),
    }
}

/// Read a bool field; absent resolves to `false`.
pub fn bool_field(value: &Value, key: &str) -> Result<bool> {
    match field(value, key) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(CodecError::json(key, format!("expected a bool, got {other}"))),
    }
}

/// Read a signed 64-bit field from a JSON number or numeric string; absent
/// resolves to zero. Magnitudes above the safe range are fatal.
pub fn i64_field(value: &Value, key: &str) -> Result<i64> {
    match field(value, key) {
        None => Ok(0),
        Some(v) => safe_i64(parse_i64(v, key)?, key),
    }
}

/// Read an unsigned 64-bit field from a JSON number or numeric string;
/// absent resolves to zero. Values above the safe range are fatal.
pub fn u64_field(value: &Value, key: &str) -> Result<u64> {
    match field(value, key) {
        None => Ok(0),
        Some(v) => safe_u64(parse_u64(v, key)?, key),
    }
}

/// Read an unsigned 32-bit field; absent resolves to zero.
pub fn u32_field(value: &Value, key: &str) -> Result<u32> {
    match field(value, key) {
        None => Ok(0),
        Some(v) => {
            let n = parse_u64(v, key)?;
            u32::try_from(n).map_err(|_| CodecError::out_of_range(n, key))
        }
    }
}

/// Read a signed 32-bit field; absent resolves to zero.
pub fn i32_field(value: &Value, key: &str) -> Result<i32> {
    match field(value, key) {
        None => Ok(0),
        Some(v) => {
            let n = parse_i64(v, key)?;
            i32::try_from(n).map_err(|_| CodecError::out_of_range(n, key))
        }
    }
}

/// Read a bytes field from base64 text; absent resolves to empty bytes.
/// Malformed base64 is fatal.
pub fn bytes_field(value: &Value, key: &str) -> Result<Vec<u8>> {
    match field(value, key) {
        None => Ok(Vec::new()),
        Some(Value::String(s)) => BASE64
            .decode(s)
            .map_err(|e| CodecError::json(key, e.to_string())),
        Some(other) => Err(CodecError::json(
            key,
            format!("expected a base64 string, got {other}"),
        )),
    }
}

/// Read a nested message field; absent stays absent.
pub fn message_field<M: Message>(value: &Value, key: &str) -> Result<Option<M>> {
    match field(value, key) {
        None => Ok(None),
        Some(v) => Ok(Some(M::from_json(v)?)),
    }
}

/// Read a repeated field, converting each element with `convert`; absent
/// resolves to an empty list.
pub fn repeated_field<T>(
    value: &Value,
    key: &str,
    convert: impl Fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    match field(value, key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(convert).collect(),
        Some(other) => Err(CodecError::json(key, format!("expected an array, got {other}"))),
    }
}

/// Convert a repeated-field element to a signed 64-bit integer.
pub fn i64_value(v: &Value, key: &str) -> Result<i64> {
    safe_i64(parse_i64(v, key)?, key)
}

/// Convert a repeated-field element to an unsigned 64-bit integer.
pub fn u64_value(v: &Value, key: &str) -> Result<u64> {
    safe_u64(parse_u64(v, key)?, key)
}

/// Convert a repeated-field element from base64 text to bytes.
pub fn bytes_value(v: &Value, key: &str) -> Result<Vec<u8>> {
    match v {
        Value::String(s) => BASE64
            .decode(s)
            .map_err(|e| CodecError::json(key, e.to_string())),
        other => Err(CodecError::json(
            key,
            format!("expected a base64 string, got {other}"),
        )),
    }
}

/// Decode standard base64 text into bytes.
pub fn bytes_from_base64(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| CodecError::json("base64", e.to_string()))
}

/// Encode bytes as standard base64 text.
pub fn base64_from_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Guard a signed 64-bit value against the safe interchange range.
pub fn safe_i64(value: i64, context: &str) -> Result<i64> {
    if value.unsigned_abs() > MAX_SAFE_INTEGER {
        return Err(CodecError::out_of_range(value, context));
    }
    Ok(value)
}

/// Guard an unsigned 64-bit value against the safe interchange range.
pub fn safe_u64(value: u64, context: &str) -> Result<u64> {
    if value > MAX_SAFE_INTEGER {
        return Err(CodecError::out_of_range(value, context));
    }
    Ok(value)
}

fn parse_i64(v: &Value, key: &str) -> Result<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| CodecError::json(key, format!("expected an integer, got {n}"))),
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| CodecError::json(key, format!("expected an integer, got \"{s}\""))),
        other => Err(CodecError::json(key, format!("expected an integer, got {other}"))),
    }
}

fn parse_u64(v: &Value, key: &str) -> Result<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| CodecError::json(key, format!("expected an unsigned integer, got {n}"))),
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| CodecError::json(key, format!("expected an unsigned integer, got \"{s}\""))),
        other => Err(CodecError::json(
            key,
            format!("expected an unsigned integer, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_treats_null_as_absent() {
        let v = json!({"a": null, "b": 1});
        assert!(field(&v, "a").is_none());
        assert!(field(&v, "missing").is_none());
        assert!(field(&v, "b").is_some());
    }

    #[test]
    fn test_string_field_defaults() {
        let v = json!({});
        assert_eq!(string_field(&v, "granter").unwrap(), "");
    }

    #[test]
    fn test_string_field_wrong_shape() {
        let v = json!({"granter": 5});
        assert!(matches!(
            string_field(&v, "granter"),
            Err(CodecError::Json { .. })
        ));
    }

    #[test]
    fn test_i64_field_accepts_number_and_string() {
        let v = json!({"a": -42, "b": "-42"});
        assert_eq!(i64_field(&v, "a").unwrap(), -42);
        assert_eq!(i64_field(&v, "b").unwrap(), -42);
        assert_eq!(i64_field(&v, "missing").unwrap(), 0);
    }

    #[test]
    fn test_u64_field_range_check() {
        let v = json!({"a": MAX_SAFE_INTEGER, "b": MAX_SAFE_INTEGER + 1});
        assert_eq!(u64_field(&v, "a").unwrap(), MAX_SAFE_INTEGER);
        assert!(matches!(
            u64_field(&v, "b"),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_i64_field_range_check() {
        let v = json!({"a": -(MAX_SAFE_INTEGER as i64) - 1});
        assert!(matches!(
            i64_field(&v, "a"),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_u32_field() {
        let v = json!({"a": 7, "b": u64::from(u32::MAX) + 1});
        assert_eq!(u32_field(&v, "a").unwrap(), 7);
        assert!(u32_field(&v, "b").is_err());
    }

    #[test]
    fn test_bytes_field_base64() {
        let v = json!({"inflation": "AQI="});
        assert_eq!(bytes_field(&v, "inflation").unwrap(), vec![1, 2]);
        assert!(bytes_field(&v, "missing").unwrap().is_empty());
    }

    #[test]
    fn test_bytes_field_malformed_base64() {
        let v = json!({"inflation": "not base64!!"});
        assert!(matches!(
            bytes_field(&v, "inflation"),
            Err(CodecError::Json { .. })
        ));
    }

    #[test]
    fn test_base64_round_trip() {
        let bytes = vec![0u8, 1, 2, 254, 255];
        assert_eq!(
            bytes_from_base64(&base64_from_bytes(&bytes)).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_repeated_field() {
        let v = json!({"xs": [1, 2, 3]});
        let xs = repeated_field(&v, "xs", |e| i64_value(e, "xs")).unwrap();
        assert_eq!(xs, vec![1, 2, 3]);
        let empty = repeated_field(&v, "missing", |_| Ok(0i64)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_repeated_bytes_elements() {
        let v = json!({"hashes": ["AQI=", "AwQ="]});
        let xs = repeated_field(&v, "hashes", |e| bytes_value(e, "hashes")).unwrap();
        assert_eq!(xs, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_bool_field() {
        let v = json!({"a": true});
        assert!(bool_field(&v, "a").unwrap());
        assert!(!bool_field(&v, "missing").unwrap());
    }
}
