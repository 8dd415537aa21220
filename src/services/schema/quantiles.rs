use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Percentile bucket for gas price estimates.
///
/// Closed set: adding a bucket needs a schema version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quantile {
    Q70,
    Q80,
    Q90,
    Q95,
    Q98,
    Q99,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown quantile: {0}")]
pub struct UnknownQuantile(pub String);

impl Quantile {
    pub const ALL: [Quantile; 6] = [
        Quantile::Q70,
        Quantile::Q80,
        Quantile::Q90,
        Quantile::Q95,
        Quantile::Q98,
        Quantile::Q99,
    ];

    /// Buckets carried by an estimation record, lowest first. Q98 is display-only.
    pub const ESTIMATION_BUCKETS: [Quantile; 5] = [
        Quantile::Q70,
        Quantile::Q80,
        Quantile::Q90,
        Quantile::Q95,
        Quantile::Q99,
    ];

    pub const fn value(self) -> u8 {
        match self {
            Quantile::Q70 => 70,
            Quantile::Q80 => 80,
            Quantile::Q90 => 90,
            Quantile::Q95 => 95,
            Quantile::Q98 => 98,
            Quantile::Q99 => 99,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Quantile::Q70 => "Q70",
            Quantile::Q80 => "Q80",
            Quantile::Q90 => "Q90",
            Quantile::Q95 => "Q95",
            Quantile::Q98 => "Q98",
            Quantile::Q99 => "Q99",
        }
    }

    pub fn has_estimation_bucket(self) -> bool {
        Self::ESTIMATION_BUCKETS.contains(&self)
    }
}

impl std::fmt::Display for Quantile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantile {
    type Err = UnknownQuantile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownQuantile(s.to_string()))
    }
}
