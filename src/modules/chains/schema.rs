use serde::Serialize;

use crate::services::chains::ChainEntry;

#[derive(Debug, Serialize)]
pub struct ChainResponse {
    pub key: String,
    #[serde(flatten)]
    pub chain: ChainEntry,
}

impl ChainResponse {
    pub fn new(key: &str, chain: &ChainEntry) -> Self {
        Self {
            key: key.to_string(),
            chain: chain.clone(),
        }
    }
}

/// Where a chain listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainListSource {
    Remote,
    /// Remote fetch failed, static registry served instead
    Static,
}

#[derive(Debug, Serialize)]
pub struct ChainListResponse {
    pub source: ChainListSource,
    pub chains: Vec<ChainEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChainErrorResponse {
    pub error: String,
}

impl ChainErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}
