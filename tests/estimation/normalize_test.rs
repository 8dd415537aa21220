/// Estimation Normalization Tests
use alloy::primitives::U256;
use serde_json::{json, Value};

use gas_oracle_shared::services::estimation::{normalize_estimation, EstimationError};
use gas_oracle_shared::services::schema::Quantile;

fn fees(gas_price: u64, priority: u64, max: u64) -> Value {
    json!({
        "gasPrice": gas_price,
        "maxPriorityFeePerGas": priority,
        "maxFeePerGas": max,
    })
}

fn raw_estimation() -> Value {
    json!({
        "Q70": fees(10, 1, 20),
        "Q80": fees(11, 2, 21),
        "Q90": fees(12, 3, 22),
        "Q95": fees(13, 4, 23),
        "Q99": fees(14, 5, 24),
        "precision": 2,
        "height": 21_000_000,
        "timestamp": 1_700_000_000,
        "chainid": 1,
    })
}

#[test]
fn copies_every_field() {
    let record = normalize_estimation(&raw_estimation()).unwrap();

    assert_eq!(record.q70.gas_price, U256::from(10u64));
    assert_eq!(record.q99.max_fee_per_gas, U256::from(24u64));
    assert_eq!(record.precision, 2);
    assert_eq!(record.height, U256::from(21_000_000u64));
    assert_eq!(record.chain_id, U256::from(1u64));
    assert_eq!(
        record.observed_at().map(|t| t.timestamp()),
        Some(1_700_000_000)
    );
}

#[test]
fn normalizing_twice_is_identity() {
    let once = normalize_estimation(&raw_estimation()).unwrap();
    let serialized = serde_json::to_value(&once).unwrap();
    let twice = normalize_estimation(&serialized).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn missing_bucket_is_malformed() {
    let mut raw = raw_estimation();
    raw.as_object_mut().unwrap().remove("Q95");

    let err = normalize_estimation(&raw).unwrap_err();
    let EstimationError::MalformedInput(msg) = err;
    assert!(msg.contains("Q95"));
}

#[test]
fn missing_fee_is_malformed() {
    let mut raw = raw_estimation();
    raw["Q80"].as_object_mut().unwrap().remove("maxFeePerGas");

    let EstimationError::MalformedInput(msg) = normalize_estimation(&raw).unwrap_err();
    assert!(msg.contains("Q80.maxFeePerGas"));
}

#[test]
fn null_scalar_is_malformed() {
    let mut raw = raw_estimation();
    raw["height"] = Value::Null;
    assert!(normalize_estimation(&raw).is_err());
}

#[test]
fn monotonicity_is_preserved_not_enforced() {
    let record = normalize_estimation(&raw_estimation()).unwrap();
    assert!(record.is_monotonic());

    let mut raw = raw_estimation();
    raw["Q99"] = fees(1, 1, 1);
    let record = normalize_estimation(&raw).unwrap();
    assert!(!record.is_monotonic());
    assert_eq!(record.get(Quantile::Q99).unwrap().gas_price, U256::from(1u64));
}

#[test]
fn wide_values_survive_as_strings() {
    let huge = format!("0x{}", "f".repeat(64));
    let mut raw = raw_estimation();
    raw["Q70"]["gasPrice"] = json!(huge);
    raw["height"] = json!("123456789012345678901234567890");

    let record = normalize_estimation(&raw).unwrap();
    assert_eq!(record.q70.gas_price, U256::MAX);
    assert_eq!(
        record.height,
        U256::from_str_radix("123456789012345678901234567890", 10).unwrap()
    );
}

#[test]
fn precision_must_fit() {
    let mut raw = raw_estimation();
    raw["precision"] = json!("0x1ffffffff");
    assert!(normalize_estimation(&raw).is_err());
}

#[test]
fn no_q98_bucket() {
    let record = normalize_estimation(&raw_estimation()).unwrap();
    assert!(record.get(Quantile::Q98).is_none());

    let serialized = serde_json::to_value(&record).unwrap();
    assert!(serialized.get("Q98").is_none());
}
