use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::services::chains::{ChainEntry, OracleChainEntry};

/// Remote chain metadata could not be obtained.
///
/// Callers are expected to fall back to the static registries.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Source of supplementary chain metadata
#[async_trait]
pub trait ChainSource: Send + Sync {
    async fn fetch_chains(&self) -> Result<Vec<ChainEntry>, FetchError>;
    async fn fetch_oracle_chains(&self) -> Result<Vec<OracleChainEntry>, FetchError>;
}

/// Chain metadata API client.
/// One GET per call, no retries and no internal timeout.
pub struct ChainFetcher {
    client: Client,
    chains_url: String,
    oracle_chains_url: String,
}

impl ChainFetcher {
    pub fn new(chains_url: impl Into<String>, oracle_chains_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), chains_url, oracle_chains_url)
    }

    pub fn with_client(
        client: Client,
        chains_url: impl Into<String>,
        oracle_chains_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            chains_url: chains_url.into(),
            oracle_chains_url: oracle_chains_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.chains_endpoint, &config.oracle_chains_endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ChainSource for ChainFetcher {
    async fn fetch_chains(&self) -> Result<Vec<ChainEntry>, FetchError> {
        let chains: Vec<ChainEntry> = self.get_json(&self.chains_url).await.inspect_err(|e| {
            tracing::warn!("Failed to fetch chains from {}: {}", self.chains_url, e);
        })?;
        tracing::debug!("Fetched {} chains", chains.len());
        Ok(chains)
    }

    async fn fetch_oracle_chains(&self) -> Result<Vec<OracleChainEntry>, FetchError> {
        let chains: Vec<OracleChainEntry> =
            self.get_json(&self.oracle_chains_url).await.inspect_err(|e| {
                tracing::warn!(
                    "Failed to fetch oracle chains from {}: {}",
                    self.oracle_chains_url,
                    e
                );
            })?;
        tracing::debug!("Fetched {} oracle chains", chains.len());
        Ok(chains)
    }
}
