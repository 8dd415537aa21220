use alloy::primitives::{address, Address};
use serde::Serialize;

use crate::services::chains::{ContractsByVersion, OracleVersion};

pub const DEFAULT_GAS_NETWORK_RPC_URL: &str = "https://http-rpc.devnet.gas.network";

/// Gas network endpoint the oracle contracts are read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleNetwork {
    pub rpc_url: String,
    pub contracts_by_version: ContractsByVersion,
}

fn contract_override(var: &str, default: Address) -> Address {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {} ({}): {}", var, raw, e);
            default
        }),
        Err(_) => default,
    }
}

/// Load the gas network configuration, honouring environment overrides
pub fn load_oracle_network() -> OracleNetwork {
    let rpc_url = std::env::var("GAS_NETWORK_RPC_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_GAS_NETWORK_RPC_URL.to_string());

    let contracts_by_version = [
        (
            OracleVersion::V1,
            contract_override(
                "GAS_NETWORK_V1_CONTRACT",
                address!("C2F61FAfA65D874725e485f4B52B9B495559F381"),
            ),
        ),
        (
            OracleVersion::V2,
            contract_override(
                "GAS_NETWORK_V2_CONTRACT",
                address!("106A0e60fb930b96BDF9da93997747601435e1d9"),
            ),
        ),
    ]
    .into_iter()
    .collect();

    OracleNetwork {
        rpc_url,
        contracts_by_version,
    }
}
