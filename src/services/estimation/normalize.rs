use alloy::primitives::U256;
use serde_json::{Map, Value};

use super::types::{EstimationError, EstimationRecord, GasEstimate};
use crate::services::schema::Quantile;

fn malformed(msg: impl Into<String>) -> EstimationError {
    EstimationError::MalformedInput(msg.into())
}

/// Parse a decimal or `0x`-prefixed hex string without loss
pub(crate) fn parse_numeric_str(raw: &str) -> Option<U256> {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return U256::from_str_radix(hex, 16).ok();
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    U256::from_str_radix(s, 10).ok()
}

fn parse_u256(path: &str, value: &Value) -> Result<U256, EstimationError> {
    match value {
        // Anything outside u64 has already lost precision in a JSON number
        Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| malformed(format!("`{}` must be an unsigned integer, got {}", path, n))),
        Value::String(s) => parse_numeric_str(s)
            .ok_or_else(|| malformed(format!("`{}` is not a valid integer: {:?}", path, s))),
        other => Err(malformed(format!("`{}` must be numeric, got {}", path, other))),
    }
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> Result<&'a Value, EstimationError> {
    match obj.get(key) {
        Some(Value::Null) | None => Err(malformed(format!("missing field `{}`", path))),
        Some(value) => Ok(value),
    }
}

fn required_u256(obj: &Map<String, Value>, key: &str) -> Result<U256, EstimationError> {
    parse_u256(key, required(obj, key, key)?)
}

fn bucket(obj: &Map<String, Value>, quantile: Quantile) -> Result<GasEstimate, EstimationError> {
    let name = quantile.name();
    let raw = required(obj, name, name)?
        .as_object()
        .ok_or_else(|| malformed(format!("`{}` must be an object", name)))?;

    let fee = |key: &str| -> Result<U256, EstimationError> {
        let path = format!("{}.{}", name, key);
        parse_u256(&path, required(raw, &path, key)?)
    };

    Ok(GasEstimate {
        gas_price: fee("gasPrice")?,
        max_priority_fee_per_gas: fee("maxPriorityFeePerGas")?,
        max_fee_per_gas: fee("maxFeePerGas")?,
    })
}

/// Build an [`EstimationRecord`] from a decoded oracle payload.
///
/// Every bucket in [`Quantile::ESTIMATION_BUCKETS`] and every scalar field must
/// be present; missing values are an error, never a default. Values are copied
/// as-is, so applying this to a serialized record yields the same record.
pub fn normalize_estimation(raw: &Value) -> Result<EstimationRecord, EstimationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| malformed("estimation payload must be a JSON object"))?;

    let precision = required_u256(obj, "precision")?;
    let precision = u64::try_from(precision)
        .ok()
        .and_then(|p| u32::try_from(p).ok())
        .ok_or_else(|| malformed(format!("`precision` out of range: {}", precision)))?;

    Ok(EstimationRecord {
        q70: bucket(obj, Quantile::Q70)?,
        q80: bucket(obj, Quantile::Q80)?,
        q90: bucket(obj, Quantile::Q90)?,
        q95: bucket(obj, Quantile::Q95)?,
        q99: bucket(obj, Quantile::Q99)?,
        precision,
        height: required_u256(obj, "height")?,
        timestamp: required_u256(obj, "timestamp")?,
        chain_id: required_u256(obj, "chainid")?,
    })
}
