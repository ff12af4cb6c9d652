// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Round-trip integration tests.
//!
//! Tests cover:
//! - Binary round trips: decode(encode(m)) == m for every module
//! - JSON round trips: from_json(to_json(m)) == m
//! - Sparse JSON output (default fields omitted)
//! - Partial construction defaulting and isolation

use chrono::{DateTime, Utc};
use serde_json::json;

use chaincodec::codec::Message;
use chaincodec::types::cosmos::authz::{
    Grant, QueryGrantsRequest, QueryGrantsRequestPartial, QueryGrantsResponse,
    QueryGrantsResponsePartial,
};
use chaincodec::types::cosmos::base::DecCoin;
use chaincodec::types::cosmos::distribution::{
    DelegatorWithdrawInfo, FeePool, GenesisState, Params as DistributionParams,
    ValidatorHistoricalRewards, ValidatorHistoricalRewardsRecord, ValidatorSlashEvent,
    ValidatorSlashEventRecord,
};
use chaincodec::types::cosmos::mint::{QueryAnnualProvisionsResponse, QueryInflationResponse};
use chaincodec::types::cosmos::pagination::{PageRequest, PageResponse};
use chaincodec::types::cosmos::slashing::{
    Params as SlashingParams, ValidatorMissedBlockArray, ValidatorSigningInfo,
};
use chaincodec::types::google::{Any, Duration, Timestamp};
use chaincodec::types::sei::evm::Params as EvmParams;
use chaincodec::types::sei::mint::{
    Params as MintParams, QueryMinterResponse, ScheduledTokenRelease,
};

fn binary_round_trip<M: Message + std::fmt::Debug>(message: &M) {
    let decoded = M::decode(&message.encode()).expect("decode failed");
    assert_eq!(&decoded, message);
}

fn json_round_trip<M: Message + std::fmt::Debug>(message: &M) {
    let restored = M::from_json(&message.to_json()).expect("from_json failed");
    assert_eq!(&restored, message);
}

fn sample_datetime() -> DateTime<Utc> {
    // Millisecond-aligned so the RFC-3339 JSON form is lossless.
    DateTime::<Utc>::from_timestamp(1_717_200_000, 250_000_000).unwrap()
}

// ============================================================================
// Exact wire vectors
// ============================================================================

#[test]
fn test_grants_request_exact_bytes() {
    let request = QueryGrantsRequest {
        granter: "a".to_string(),
        grantee: String::new(),
        msg_type_url: String::new(),
        pagination: None,
    };
    assert_eq!(request.encode(), vec![0x0A, 0x01, b'a']);
}

#[test]
fn test_default_message_encodes_to_empty() {
    assert!(QueryGrantsRequest::default().encode().is_empty());
    assert!(PageRequest::default().encode().is_empty());
    assert!(GenesisState::default().encode().is_empty());
}

#[test]
fn test_inflation_response_from_json_base64() {
    let response = QueryInflationResponse::from_json(&json!({"inflation": "AQI="})).unwrap();
    assert_eq!(response.inflation, vec![1, 2]);
}

// ============================================================================
// Binary round trips
// ============================================================================

#[test]
fn test_round_trip_authz_grants_request() {
    let request = QueryGrantsRequest {
        granter: "sei1granter".to_string(),
        grantee: "sei1grantee".to_string(),
        msg_type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
        pagination: Some(PageRequest {
            key: vec![1, 2, 3],
            offset: 10,
            limit: 50,
            count_total: true,
            reverse: false,
        }),
    };
    binary_round_trip(&request);
    json_round_trip(&request);
}

#[test]
fn test_round_trip_authz_grants_response() {
    let response = QueryGrantsResponse {
        grants: vec![
            Grant {
                authorization: Some(Any {
                    type_url: "/cosmos.authz.v1beta1.GenericAuthorization".to_string(),
                    value: vec![0x0A, 0x03, b'a', b'b', b'c'],
                }),
                expiration: Some(sample_datetime()),
            },
            Grant::default(),
        ],
        pagination: Some(PageResponse {
            next_key: vec![9, 8],
            total: 2,
        }),
    };
    binary_round_trip(&response);
    json_round_trip(&response);
}

#[test]
fn test_round_trip_distribution_genesis() {
    let genesis = GenesisState {
        params: Some(DistributionParams {
            community_tax: "0.020000000000000000".to_string(),
            base_proposer_reward: "0.010000000000000000".to_string(),
            bonus_proposer_reward: "0.040000000000000000".to_string(),
            withdraw_addr_enabled: true,
        }),
        fee_pool: Some(FeePool {
            community_pool: vec![DecCoin {
                denom: "usei".to_string(),
                amount: "1000.5".to_string(),
            }],
        }),
        delegator_withdraw_infos: vec![DelegatorWithdrawInfo {
            delegator_address: "sei1delegator".to_string(),
            withdraw_address: "sei1withdraw".to_string(),
        }],
        previous_proposer: "seivalcons1prev".to_string(),
        outstanding_rewards: Vec::new(),
        validator_accumulated_commissions: Vec::new(),
        validator_historical_rewards: vec![ValidatorHistoricalRewardsRecord {
            validator_address: "seivaloper1val".to_string(),
            period: 7,
            rewards: Some(ValidatorHistoricalRewards {
                cumulative_reward_ratio: vec![DecCoin {
                    denom: "usei".to_string(),
                    amount: "0.25".to_string(),
                }],
                reference_count: 2,
            }),
        }],
        validator_current_rewards: Vec::new(),
        delegator_starting_infos: Vec::new(),
        validator_slash_events: vec![ValidatorSlashEventRecord {
            validator_address: "seivaloper1val".to_string(),
            height: 1200,
            period: 3,
            validator_slash_event: Some(ValidatorSlashEvent {
                validator_period: 3,
                fraction: "0.05".to_string(),
            }),
        }],
    };
    binary_round_trip(&genesis);
    json_round_trip(&genesis);
}

#[test]
fn test_round_trip_slashing_signing_info() {
    let info = ValidatorSigningInfo {
        address: "seivalcons1addr".to_string(),
        start_height: 100,
        index_offset: 5,
        jailed_until: Some(sample_datetime()),
        tombstoned: true,
        missed_blocks_counter: 12,
    };
    binary_round_trip(&info);
    json_round_trip(&info);
}

#[test]
fn test_round_trip_slashing_params() {
    let params = SlashingParams {
        signed_blocks_window: 10_000,
        min_signed_per_window: vec![0x05, 0x00],
        downtime_jail_duration: Some(Duration {
            seconds: 600,
            nanos: 0,
        }),
        slash_fraction_double_sign: vec![0x01],
        slash_fraction_downtime: vec![0x02],
    };
    binary_round_trip(&params);
    json_round_trip(&params);
}

#[test]
fn test_round_trip_missed_block_array() {
    let array = ValidatorMissedBlockArray {
        address: "seivalcons1addr".to_string(),
        window_size: 10_000,
        missed_blocks: vec![1, 5, 9, 1_000_000],
    };
    binary_round_trip(&array);
    json_round_trip(&array);
}

#[test]
fn test_round_trip_mint_minter_response() {
    let response = QueryMinterResponse {
        start_date: "2024-01-01".to_string(),
        end_date: "2024-12-31".to_string(),
        denom: "usei".to_string(),
        total_mint_amount: 1_000_000,
        remaining_mint_amount: 250_000,
        last_mint_amount: 1_000,
        last_mint_date: "2024-06-01".to_string(),
        last_mint_height: 424_242,
    };
    binary_round_trip(&response);
    json_round_trip(&response);
}

#[test]
fn test_round_trip_mint_params_with_schedule() {
    let params = MintParams {
        mint_denom: "usei".to_string(),
        token_release_schedule: vec![
            ScheduledTokenRelease {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-06-30".to_string(),
                token_release_amount: 500_000,
            },
            ScheduledTokenRelease {
                start_date: "2024-07-01".to_string(),
                end_date: "2024-12-31".to_string(),
                token_release_amount: 500_000,
            },
        ],
    };
    binary_round_trip(&params);
    json_round_trip(&params);
}

#[test]
fn test_round_trip_cosmos_mint_responses() {
    let inflation = QueryInflationResponse {
        inflation: vec![1, 2, 3, 255],
    };
    binary_round_trip(&inflation);
    json_round_trip(&inflation);

    let provisions = QueryAnnualProvisionsResponse {
        annual_provisions: vec![0, 0, 7],
    };
    binary_round_trip(&provisions);
    json_round_trip(&provisions);
}

#[test]
fn test_round_trip_evm_params() {
    let params = EvmParams {
        priority_normalizer: "1.000000000000000000".to_string(),
        base_fee_per_gas: "0.000000000000000000".to_string(),
        minimum_fee_per_gas: "100000000000.000000000000000000".to_string(),
        whitelisted_cw_code_hashes_for_delegate_call: vec![vec![0xAA; 32], vec![0xBB; 32]],
        deliver_tx_hook_wasm_gas_limit: 300_000,
        max_dynamic_base_fee_upward_adjustment: "0.018900000000000000".to_string(),
        max_dynamic_base_fee_downward_adjustment: "0.003900000000000000".to_string(),
        target_gas_used_per_block: 250_000,
        maximum_fee_per_gas: "1000000000000.000000000000000000".to_string(),
    };
    binary_round_trip(&params);
    json_round_trip(&params);
}

#[test]
fn test_round_trip_timestamp_wire_precision() {
    // The wire form keeps full nanosecond precision even though the JSON
    // form is millisecond-truncated.
    let ts = Timestamp {
        seconds: 1_700_000_000,
        nanos: 123_456_789,
    };
    binary_round_trip(&ts);
}

// ============================================================================
// Sparse JSON output
// ============================================================================

#[test]
fn test_default_messages_serialize_to_empty_object() {
    assert_eq!(QueryGrantsRequest::default().to_json(), json!({}));
    assert_eq!(QueryGrantsResponse::default().to_json(), json!({}));
    assert_eq!(GenesisState::default().to_json(), json!({}));
    assert_eq!(ValidatorSigningInfo::default().to_json(), json!({}));
    assert_eq!(QueryMinterResponse::default().to_json(), json!({}));
    assert_eq!(EvmParams::default().to_json(), json!({}));
    assert_eq!(ValidatorMissedBlockArray::default().to_json(), json!({}));
}

#[test]
fn test_to_json_omits_only_default_fields() {
    let request = QueryGrantsRequest {
        granter: "a".to_string(),
        ..Default::default()
    };
    assert_eq!(request.to_json(), json!({"granter": "a"}));
}

#[test]
fn test_json_field_names_stay_snake_case() {
    let response = QueryMinterResponse {
        total_mint_amount: 5,
        ..Default::default()
    };
    let value = response.to_json();
    assert_eq!(value, json!({"total_mint_amount": 5}));
}

// ============================================================================
// Partial construction
// ============================================================================

#[test]
fn test_create_without_partial_is_default() {
    assert_eq!(QueryGrantsRequest::create(None), QueryGrantsRequest::default());
    assert_eq!(
        QueryGrantsResponse::create(None),
        QueryGrantsResponse::default()
    );
}

#[test]
fn test_from_partial_merges_over_defaults() {
    let message = QueryGrantsRequest::from_partial(QueryGrantsRequestPartial {
        granter: Some("sei1granter".to_string()),
        ..Default::default()
    });
    assert_eq!(message.granter, "sei1granter");
    assert_eq!(message.grantee, "");
    assert_eq!(message.msg_type_url, "");
    assert!(message.pagination.is_none());
}

#[test]
fn test_from_partial_lists_are_independent() {
    let mut first = QueryGrantsResponse::from_partial(QueryGrantsResponsePartial::default());
    let second = QueryGrantsResponse::from_partial(QueryGrantsResponsePartial::default());

    first.grants.push(Grant::default());
    assert_eq!(first.grants.len(), 1);
    assert!(second.grants.is_empty());
}

#[test]
fn test_from_partial_recurses_into_nested_messages() {
    use chaincodec::types::cosmos::pagination::PageRequestPartial;

    let message = QueryGrantsRequest::from_partial(QueryGrantsRequestPartial {
        pagination: Some(PageRequestPartial {
            limit: Some(25),
            ..Default::default()
        }),
        ..Default::default()
    });
    let pagination = message.pagination.expect("pagination should be present");
    assert_eq!(pagination.limit, 25);
    assert_eq!(pagination.offset, 0);
    assert!(pagination.key.is_empty());
}
