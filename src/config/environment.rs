use std::env;

use super::networks::{load_oracle_network, OracleNetwork};
use crate::services::estimation::selector::DEFAULT_BLOB_FEE_CHAIN_IDS;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CHAINS_ENDPOINT: &str = "https://api.blocknative.com/chains";
pub const DEFAULT_ORACLE_CHAINS_ENDPOINT: &str = "https://api.blocknative.com/oracles";

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub chains_endpoint: String,
    pub oracle_chains_endpoint: String,
    /// Chains whose fee data includes blob base fees
    pub blob_fee_chain_ids: Vec<u64>,
    /// RPC used when registering Ethereum mainnet with a wallet
    pub mainnet_rpc_url: Option<String>,
    pub oracle_network: OracleNetwork,
}

/// Parse a comma separated list of chain ids, e.g. `1,8453`
pub fn parse_chain_ids(raw: &str) -> Result<Vec<u64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .map_err(|_| format!("Invalid chain id in BLOB_FEE_CHAIN_IDS: {}", part))
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let chains_endpoint =
            env::var("CHAINS_ENDPOINT").unwrap_or_else(|_| DEFAULT_CHAINS_ENDPOINT.to_string());

        let oracle_chains_endpoint = env::var("ORACLE_CHAINS_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ORACLE_CHAINS_ENDPOINT.to_string());

        let blob_fee_chain_ids = match env::var("BLOB_FEE_CHAIN_IDS") {
            Ok(raw) => parse_chain_ids(&raw)?,
            Err(_) => DEFAULT_BLOB_FEE_CHAIN_IDS.to_vec(),
        };

        let mainnet_rpc_url = env::var("MAINNET_RPC_URL").ok().filter(|url| !url.is_empty());

        Ok(Self {
            bind_addr,
            chains_endpoint,
            oracle_chains_endpoint,
            blob_fee_chain_ids,
            mainnet_rpc_url,
            oracle_network: load_oracle_network(),
        })
    }
}
