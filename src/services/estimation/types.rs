use alloy::primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::schema::Quantile;

/// Fee triple for one quantile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasEstimate {
    /// Legacy gas price in wei
    pub gas_price: U256,
    pub max_priority_fee_per_gas: U256,
    pub max_fee_per_gas: U256,
}

impl GasEstimate {
    /// True when every fee is at least the matching fee of `lower`
    pub fn dominates(&self, lower: &GasEstimate) -> bool {
        self.gas_price >= lower.gas_price
            && self.max_priority_fee_per_gas >= lower.max_priority_fee_per_gas
            && self.max_fee_per_gas >= lower.max_fee_per_gas
    }
}

/// Normalized oracle snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimationRecord {
    #[serde(rename = "Q70")]
    pub q70: GasEstimate,
    #[serde(rename = "Q80")]
    pub q80: GasEstimate,
    #[serde(rename = "Q90")]
    pub q90: GasEstimate,
    #[serde(rename = "Q95")]
    pub q95: GasEstimate,
    #[serde(rename = "Q99")]
    pub q99: GasEstimate,
    /// Scale factor applied to fee values by the oracle
    pub precision: u32,
    pub height: U256,
    /// Seconds since the Unix epoch
    pub timestamp: U256,
    #[serde(rename = "chainid")]
    pub chain_id: U256,
}

impl EstimationRecord {
    /// `None` for quantiles without an estimation bucket (Q98)
    pub fn get(&self, quantile: Quantile) -> Option<&GasEstimate> {
        match quantile {
            Quantile::Q70 => Some(&self.q70),
            Quantile::Q80 => Some(&self.q80),
            Quantile::Q90 => Some(&self.q90),
            Quantile::Q95 => Some(&self.q95),
            Quantile::Q99 => Some(&self.q99),
            Quantile::Q98 => None,
        }
    }

    pub fn buckets(&self) -> [(Quantile, &GasEstimate); 5] {
        [
            (Quantile::Q70, &self.q70),
            (Quantile::Q80, &self.q80),
            (Quantile::Q90, &self.q90),
            (Quantile::Q95, &self.q95),
            (Quantile::Q99, &self.q99),
        ]
    }

    /// Whether fees never decrease from a lower to a higher quantile.
    /// Informational only, normalization never reorders values.
    pub fn is_monotonic(&self) -> bool {
        self.buckets()
            .windows(2)
            .all(|pair| pair[1].1.dominates(pair[0].1))
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        let secs = u64::try_from(self.timestamp).ok()?;
        DateTime::from_timestamp(i64::try_from(secs).ok()?, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimationError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}
