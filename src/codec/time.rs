// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Well-known `Timestamp` conversions.
//!
//! Timestamp-typed message fields are exposed as [`chrono::DateTime<Utc>`]
//! values. On the wire they travel as the nested
//! [`Timestamp`](crate::types::google::Timestamp) message; in JSON they are
//! RFC-3339 strings with millisecond precision (a nested `{seconds, nanos}`
//! object is also accepted on input).

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::core::{CodecError, Result};
use crate::types::google::Timestamp;

use super::json;
use super::Message;

/// Convert a wall-clock time to the wire `Timestamp` message.
pub fn datetime_to_timestamp(dt: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

/// Convert a wire `Timestamp` message to a wall-clock time.
///
/// Nanos outside `0..=999_999_999` are rejected rather than normalized.
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos)
        .map_err(|_| CodecError::json("timestamp", format!("negative nanos: {}", ts.nanos)))?;
    DateTime::<Utc>::from_timestamp(ts.seconds, nanos).ok_or_else(|| {
        CodecError::json(
            "timestamp",
            format!("out-of-range seconds/nanos: {}/{}", ts.seconds, ts.nanos),
        )
    })
}

/// Format a timestamp field for the canonical JSON mapping.
pub fn datetime_to_json(dt: &DateTime<Utc>) -> Value {
    Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Read a timestamp field from either an RFC-3339 string or a nested
/// `{seconds, nanos}` object; absent stays absent.
pub fn timestamp_field(value: &Value, key: &str) -> Result<Option<DateTime<Utc>>> {
    match json::field(value, key) {
        None => Ok(None),
        Some(v) => parse_datetime(v, key).map(Some),
    }
}

fn parse_datetime(v: &Value, key: &str) -> Result<DateTime<Utc>> {
    match v {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| CodecError::json(key, format!("invalid RFC-3339 timestamp: {e}"))),
        Value::Object(_) => {
            let ts = Timestamp::from_json(v)?;
            timestamp_to_datetime(&ts)
        }
        other => Err(CodecError::json(
            key,
            format!("expected a timestamp string or object, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_datetime_round_trip_through_timestamp() {
        let dt = DateTime::<Utc>::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let ts = datetime_to_timestamp(&dt);
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 123_456_789);
        assert_eq!(timestamp_to_datetime(&ts).unwrap(), dt);
    }

    #[test]
    fn test_datetime_to_json_is_millis_rfc3339() {
        let dt = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
        assert_eq!(
            datetime_to_json(&dt),
            Value::String("1970-01-01T00:00:00.000Z".to_string())
        );
    }

    #[test]
    fn test_timestamp_field_from_string() {
        let v = json!({"jailed_until": "2024-05-01T12:30:00.250Z"});
        let dt = timestamp_field(&v, "jailed_until").unwrap().unwrap();
        assert_eq!(datetime_to_json(&dt), v["jailed_until"]);
    }

    #[test]
    fn test_timestamp_field_from_object() {
        let v = json!({"jailed_until": {"seconds": 120, "nanos": 500000000}});
        let dt = timestamp_field(&v, "jailed_until").unwrap().unwrap();
        assert_eq!(dt.timestamp(), 120);
        assert_eq!(dt.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn test_timestamp_field_absent() {
        let v = json!({});
        assert!(timestamp_field(&v, "jailed_until").unwrap().is_none());
    }

    #[test]
    fn test_timestamp_field_malformed() {
        let v = json!({"jailed_until": "yesterday"});
        assert!(timestamp_field(&v, "jailed_until").is_err());
    }

    #[test]
    fn test_negative_nanos_rejected() {
        let ts = Timestamp {
            seconds: 10,
            nanos: -1,
        };
        assert!(timestamp_to_datetime(&ts).is_err());
    }
}
