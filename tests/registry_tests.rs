// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type registry and legacy converter integration tests.
//!
//! Tests cover:
//! - Generic decoding/encoding through the global registry
//! - Registry contents and lookup failures
//! - Legacy ("amino") pass-through conversion

use serde_json::json;

use chaincodec::codec::Message;
use chaincodec::types::cosmos::authz::QueryGrantsRequest;
use chaincodec::types::google::Any;
use chaincodec::{global_amino_registry, global_registry, CodecError};

// ============================================================================
// Generic decoding through the registry
// ============================================================================

#[test]
fn test_registry_decodes_without_concrete_type() {
    let request = QueryGrantsRequest {
        granter: "sei1granter".to_string(),
        ..Default::default()
    };

    let value = global_registry()
        .decode("/cosmos.authz.v1beta1.QueryGrantsRequest", &request.encode())
        .unwrap();
    assert_eq!(value, json!({"granter": "sei1granter"}));
}

#[test]
fn test_registry_encodes_without_concrete_type() {
    let bytes = global_registry()
        .encode(
            "/cosmos.authz.v1beta1.QueryGrantsRequest",
            &json!({"granter": "a"}),
        )
        .unwrap();
    assert_eq!(bytes, vec![0x0A, 0x01, b'a']);
}

#[test]
fn test_registry_decodes_any_payload() {
    // An Any wraps the inner message's encoded bytes plus its type URL; the
    // registry resolves the URL to the right decoder.
    let inner = QueryGrantsRequest {
        granter: "sei1granter".to_string(),
        grantee: "sei1grantee".to_string(),
        ..Default::default()
    };
    let any = Any {
        type_url: QueryGrantsRequest::TYPE_URL.to_string(),
        value: inner.encode(),
    };

    let value = global_registry().decode(&any.type_url, &any.value).unwrap();
    assert_eq!(value, inner.to_json());
}

#[test]
fn test_registry_round_trip_through_json() {
    let original = json!({
        "start_date": "2024-01-01",
        "total_mint_amount": 1000000,
    });
    let url = "/seiprotocol.seichain.mint.QueryMinterResponse";

    let bytes = global_registry().encode(url, &original).unwrap();
    let restored = global_registry().decode(url, &bytes).unwrap();
    assert_eq!(restored, original);
}

// ============================================================================
// Registry contents
// ============================================================================

#[test]
fn test_registry_covers_every_module() {
    let registry = global_registry();
    let expected = [
        "/cosmos.authz.v1beta1.QueryGrantsRequest",
        "/cosmos.authz.v1beta1.QueryGranteeGrantsResponse",
        "/cosmos.distribution.v1beta1.GenesisState",
        "/cosmos.distribution.v1beta1.DelegatorWithdrawInfo",
        "/cosmos.mint.v1beta1.QueryInflationResponse",
        "/cosmos.slashing.v1beta1.Params",
        "/seiprotocol.seichain.mint.QueryMinterResponse",
        "/seiprotocol.seichain.evm.Params",
        "/seiprotocol.seichain.evm.ParamsPreV580",
    ];
    for url in expected {
        assert!(registry.contains(url), "missing registry entry: {url}");
    }
}

#[test]
fn test_registry_entry_count() {
    // authz 6 + distribution 8 + cosmos mint 6 + slashing 5 + chain mint 4
    // + evm 2
    assert_eq!(global_registry().count(), 31);
}

#[test]
fn test_supporting_types_are_not_registered() {
    let registry = global_registry();
    assert!(!registry.contains("/cosmos.base.v1beta1.Coin"));
    assert!(!registry.contains("/google.protobuf.Timestamp"));
    assert!(!registry.contains("/cosmos.base.query.v1beta1.PageRequest"));
}

#[test]
fn test_every_registered_type_round_trips_default() {
    // For each registered type: an empty buffer decodes to the default
    // message (sparse JSON {}), and re-encoding that JSON decodes back to
    // the same empty object.
    let registry = global_registry();
    for url in registry.type_urls() {
        let default_json = registry.decode(url, &[]).unwrap();
        assert_eq!(default_json, json!({}), "non-sparse default for {url}");

        let bytes = registry.encode(url, &default_json).unwrap();
        let restored = registry.decode(url, &bytes).unwrap();
        assert_eq!(restored, default_json, "default round trip failed for {url}");
    }
}

#[test]
fn test_unknown_type_url_fails_lookup() {
    let err = global_registry()
        .decode("/cosmos.gov.v1beta1.Proposal", &[])
        .unwrap_err();
    assert!(matches!(err, CodecError::TypeNotFound { .. }));
}

// ============================================================================
// Legacy conversion
// ============================================================================

#[test]
fn test_amino_pass_through_preserves_message() {
    let message = json!({
        "granter": "sei1granter",
        "grantee": "sei1grantee",
    });
    let converter = global_amino_registry()
        .get("/cosmos.authz.v1beta1.QueryGrantsRequest")
        .unwrap();

    let amino = converter.to_amino(&message);
    assert_eq!(amino, message);
    assert_eq!(converter.from_amino(&amino), message);
}

#[test]
fn test_amino_names_follow_module_conventions() {
    let amino = global_amino_registry();
    assert_eq!(
        amino
            .get("/cosmos.distribution.v1beta1.GenesisState")
            .unwrap()
            .amino_type,
        "cosmos-sdk/GenesisState"
    );
    assert_eq!(
        amino
            .get("/seiprotocol.seichain.mint.QueryParamsRequest")
            .unwrap()
            .amino_type,
        "mint/QueryParamsRequest"
    );
    assert_eq!(
        amino
            .get("/cosmos.slashing.v1beta1.Params")
            .unwrap()
            .amino_type,
        "cosmos-sdk/Params"
    );
}

#[test]
fn test_amino_registry_count() {
    // Every registered type except the two evm params messages.
    assert_eq!(global_amino_registry().count(), 29);
}

#[test]
fn test_amino_lookup_miss() {
    let err = global_amino_registry()
        .get("/seiprotocol.seichain.evm.Params")
        .unwrap_err();
    assert!(matches!(err, CodecError::TypeNotFound { .. }));
}
