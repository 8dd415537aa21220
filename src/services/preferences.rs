use serde::{Deserialize, Serialize};

use crate::services::chains::{
    lookup_readable, resolve_readable, ChainEntry, OracleVersion, DEFAULT_READABLE_KEY,
};
use crate::services::schema::Quantile;

/// Local storage key the UI keeps preferences under
pub const PREFERENCES_KEY: &str = "gas-oracle-preferences";

/// User-selected chain, quantile and oracle version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub chain_key: String,
    pub quantile: Quantile,
    pub oracle_version: OracleVersion,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            chain_key: DEFAULT_READABLE_KEY.to_string(),
            quantile: Quantile::Q99,
            oracle_version: OracleVersion::V2,
        }
    }
}

impl Preferences {
    /// Parse stored preferences. Corrupt data yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding stored preferences: {}", e);
            Self::default()
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Selected readable chain, falling back to the default chain and then to
    /// the unsupported sentinel
    pub fn resolve_chain(&self) -> &'static ChainEntry {
        lookup_readable(&self.chain_key).unwrap_or_else(|e| {
            tracing::debug!("{}, falling back to {}", e, DEFAULT_READABLE_KEY);
            resolve_readable(DEFAULT_READABLE_KEY)
        })
    }
}
