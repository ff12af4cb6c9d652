// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire format compatibility tests.
//!
//! Tests cover:
//! - Unknown-field tolerance (wire and JSON)
//! - Packed/unpacked equivalence for repeated scalars
//! - Safe-integer range enforcement on decode
//! - Fatal handling of truncated and malformed input
//! - Nested message boundary handling

use serde_json::json;

use chaincodec::codec::Message;
use chaincodec::types::cosmos::authz::QueryGrantsRequest;
use chaincodec::types::cosmos::pagination::PageRequest;
use chaincodec::types::cosmos::slashing::{
    ValidatorMissedBlockArray, ValidatorMissedBlockArrayLegacyMissedHeights,
};
use chaincodec::types::sei::mint::QueryMinterResponse;
use chaincodec::{CodecError, WireType, WireWriter};

// ============================================================================
// Unknown-field tolerance
// ============================================================================

#[test]
fn test_unknown_varint_field_is_skipped() {
    let mut w = WireWriter::new();
    w.tag(15, WireType::Varint);
    w.varint(999);
    w.tag(1, WireType::Len);
    w.string("a");

    let decoded = QueryGrantsRequest::decode(w.data()).unwrap();
    assert_eq!(
        decoded,
        QueryGrantsRequest {
            granter: "a".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_unknown_length_delimited_field_is_skipped() {
    let mut w = WireWriter::new();
    w.tag(9, WireType::Len);
    w.bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
    w.tag(2, WireType::Varint);
    w.uint64(7);

    let decoded = PageRequest::decode(w.data()).unwrap();
    assert_eq!(decoded.offset, 7);
}

#[test]
fn test_unknown_fixed_width_fields_are_skipped() {
    let mut w = WireWriter::new();
    w.tag(12, WireType::Fixed64);
    w.fixed64(u64::MAX);
    w.tag(13, WireType::Fixed32);
    w.fixed32(u32::MAX);
    w.tag(1, WireType::Len);
    w.string("granter");

    let decoded = QueryGrantsRequest::decode(w.data()).unwrap();
    assert_eq!(decoded.granter, "granter");
}

#[test]
fn test_known_field_with_wrong_wire_type_is_skipped() {
    // Field 1 of QueryGrantsRequest is a string; send it as a varint. The
    // decoder must fall through to the generic skip, not misparse.
    let mut w = WireWriter::new();
    w.tag(1, WireType::Varint);
    w.varint(42);
    w.tag(2, WireType::Len);
    w.string("grantee");

    let decoded = QueryGrantsRequest::decode(w.data()).unwrap();
    assert_eq!(decoded.granter, "");
    assert_eq!(decoded.grantee, "grantee");
}

#[test]
fn test_unknown_json_keys_are_ignored() {
    let decoded = QueryGrantsRequest::from_json(&json!({
        "granter": "a",
        "some_future_field": {"nested": true},
    }))
    .unwrap();
    assert_eq!(decoded.granter, "a");
}

// ============================================================================
// Packed/unpacked equivalence
// ============================================================================

#[test]
fn test_packed_and_unpacked_decode_identically() {
    let values: Vec<u64> = vec![1, 5, 300, 1_000_000];

    // Packed: one length-delimited record (what the encoder emits).
    let mut packed = WireWriter::new();
    packed.tag(3, WireType::Len);
    packed.fork();
    for v in &values {
        packed.uint64(*v);
    }
    packed.join();

    // Unpacked: one varint-tagged value per element.
    let mut unpacked = WireWriter::new();
    for v in &values {
        unpacked.tag(3, WireType::Varint);
        unpacked.uint64(*v);
    }

    let from_packed = ValidatorMissedBlockArray::decode(packed.data()).unwrap();
    let from_unpacked = ValidatorMissedBlockArray::decode(unpacked.data()).unwrap();
    assert_eq!(from_packed, from_unpacked);
    assert_eq!(from_packed.missed_blocks, values);
}

#[test]
fn test_packed_signed_values_decode() {
    let array = ValidatorMissedBlockArrayLegacyMissedHeights {
        address: "addr".to_string(),
        missed_heights: vec![10, 20, 30],
    };
    let decoded =
        ValidatorMissedBlockArrayLegacyMissedHeights::decode(&array.encode()).unwrap();
    assert_eq!(decoded, array);
}

#[test]
fn test_empty_packed_record_round_trips() {
    // The encoder always writes the packed record for these fields, so an
    // all-default message still produces tag + zero length.
    let encoded = ValidatorMissedBlockArrayLegacyMissedHeights::default().encode();
    assert_eq!(encoded, vec![18, 0]);

    let decoded = ValidatorMissedBlockArrayLegacyMissedHeights::decode(&encoded).unwrap();
    assert_eq!(decoded, ValidatorMissedBlockArrayLegacyMissedHeights::default());
}

// ============================================================================
// Safe-integer range enforcement
// ============================================================================

#[test]
fn test_wire_u64_above_safe_range_is_fatal() {
    // total_mint_amount = 2^53 exceeds the largest safe value 2^53 - 1.
    let mut w = WireWriter::new();
    w.tag(4, WireType::Varint);
    w.uint64(1 << 53);

    let err = QueryMinterResponse::decode(w.data()).unwrap_err();
    assert!(matches!(err, CodecError::OutOfRange { .. }));
}

#[test]
fn test_wire_u64_at_safe_range_limit_decodes() {
    let mut w = WireWriter::new();
    w.tag(4, WireType::Varint);
    w.uint64((1 << 53) - 1);

    let decoded = QueryMinterResponse::decode(w.data()).unwrap();
    assert_eq!(decoded.total_mint_amount, (1 << 53) - 1);
}

#[test]
fn test_json_u64_above_safe_range_is_fatal() {
    let err =
        QueryMinterResponse::from_json(&json!({"total_mint_amount": 9007199254740992u64}))
            .unwrap_err();
    assert!(matches!(err, CodecError::OutOfRange { .. }));
}

#[test]
fn test_json_numeric_strings_are_accepted() {
    let decoded =
        QueryMinterResponse::from_json(&json!({"total_mint_amount": "123456"})).unwrap();
    assert_eq!(decoded.total_mint_amount, 123_456);
}

// ============================================================================
// Malformed input is fatal
// ============================================================================

#[test]
fn test_truncated_length_prefix_is_fatal() {
    // Claims 5 bytes of payload but provides 1.
    let buf = [0x0A, 0x05, b'a'];
    let err = QueryGrantsRequest::decode(&buf).unwrap_err();
    assert!(matches!(err, CodecError::LengthExceeded { .. }));
}

#[test]
fn test_unterminated_varint_is_fatal() {
    let buf = [0x08, 0x80];
    let err = QueryMinterResponse::decode(&buf).unwrap_err();
    assert!(matches!(err, CodecError::Truncated { .. }));
}

#[test]
fn test_invalid_utf8_string_is_fatal() {
    let buf = [0x0A, 0x02, 0xFF, 0xFE];
    assert!(QueryGrantsRequest::decode(&buf).is_err());
}

#[test]
fn test_malformed_base64_in_json_is_fatal() {
    let err = PageRequest::from_json(&json!({"key": "!!not-base64!!"})).unwrap_err();
    assert!(matches!(err, CodecError::Json { .. }));
}

// ============================================================================
// Nested message boundaries
// ============================================================================

#[test]
fn test_nested_message_stops_at_its_boundary() {
    // pagination sub-message followed by a top-level field; the nested
    // decoder must not consume past its length prefix.
    let request = QueryGrantsRequest {
        granter: "g".to_string(),
        pagination: Some(PageRequest {
            limit: 10,
            ..Default::default()
        }),
        ..Default::default()
    };

    let mut w = WireWriter::new();
    w.tag(4, WireType::Len);
    w.fork();
    w.tag(3, WireType::Varint);
    w.uint64(10);
    w.join();
    w.tag(1, WireType::Len);
    w.string("g");

    let decoded = QueryGrantsRequest::decode(w.data()).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn test_zero_tag_terminates_decode() {
    let mut w = WireWriter::new();
    w.tag(1, WireType::Len);
    w.string("a");
    w.varint(0);
    w.tag(2, WireType::Len);
    w.string("ignored");

    let decoded = QueryGrantsRequest::decode(w.data()).unwrap();
    assert_eq!(decoded.granter, "a");
    assert_eq!(decoded.grantee, "");
}
