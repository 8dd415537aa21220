use serde::{Deserialize, Serialize};

use alloy::primitives::U256;

use crate::services::chains::Architecture;
use crate::services::estimation::DecodedValue;
use crate::services::schema::{MetricField, Quantile};

#[derive(Debug, Serialize)]
pub struct QuantileResponse {
    pub name: Quantile,
    pub value: u8,
    /// Whether estimation records carry this bucket
    pub estimated: bool,
}

impl From<Quantile> for QuantileResponse {
    fn from(q: Quantile) -> Self {
        Self {
            name: q,
            value: q.value(),
            estimated: q.has_estimation_bucket(),
        }
    }
}

// Query parameters for /schema/fields/{code}
#[derive(Debug, Deserialize, Default)]
pub struct FieldQuery {
    pub arch: Option<String>, // Architecture tag or code, defaults to evm
    pub version: Option<u8>,  // Schema version, defaults to 1
}

#[derive(Debug, Serialize)]
pub struct FieldResponse {
    pub code: u32,
    pub known: bool,
    pub field: Option<MetricField>,
}

// Query parameters for /codes
#[derive(Debug, Deserialize)]
pub struct CodesQuery {
    pub arch: String,          // "evm", "btc", "svm" or the integer code
    pub chain_id: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CodesResponse {
    pub arch_code: u8,
    pub chain_id: Option<u64>,
    pub codes: Vec<u32>,
}

// Query parameters for /estimations/decode
#[derive(Debug, Deserialize, Default)]
pub struct DecodeQuery {
    pub version: Option<u8>, // Schema version, defaults to 1
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub arch: Architecture,
    pub chain_id: U256,
    pub height: U256,
    pub timestamp: U256,
    pub values: Vec<DecodedValue>,
}

#[derive(Debug, Serialize)]
pub struct EstimationErrorResponse {
    pub error: String,
}

impl EstimationErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}
