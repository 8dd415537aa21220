use serde::Serialize;

use super::registry::ChainRegistry;
use super::types::{Architecture, ChainEntry};

/// Network descriptor handed to the wallet-connection layer so it can
/// register chains with an injected wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletNetwork {
    /// Hex chain id, e.g. `0xaa36a7`
    pub id: String,
    pub token: String,
    pub label: String,
    pub rpc_url: String,
}

impl WalletNetwork {
    /// Only EVM entries with an RPC endpoint can be registered
    pub fn from_entry(entry: &ChainEntry) -> Option<Self> {
        if entry.architecture != Architecture::Evm {
            return None;
        }
        let rpc_url = entry.rpc_url.as_ref()?;
        Some(Self {
            id: format!("{:#x}", entry.chain_id),
            token: "ETH".to_string(),
            label: entry.label.clone(),
            rpc_url: rpc_url.clone(),
        })
    }
}

/// Networks to register with the wallet.
///
/// Mainnet is listed first when an RPC URL for it is configured, followed by
/// every registrable entry of `writable` in declaration order.
pub fn wallet_networks(
    writable: &ChainRegistry,
    mainnet_rpc_url: Option<&str>,
) -> Vec<WalletNetwork> {
    let mut networks = Vec::with_capacity(writable.len() + 1);

    if let Some(rpc_url) = mainnet_rpc_url.filter(|url| !url.is_empty()) {
        networks.push(WalletNetwork {
            id: "0x1".to_string(),
            token: "ETH".to_string(),
            label: "Ethereum".to_string(),
            rpc_url: rpc_url.to_string(),
        });
    }

    for (key, entry) in writable.iter() {
        match WalletNetwork::from_entry(entry) {
            Some(network) if !networks.iter().any(|n| n.id == network.id) => networks.push(network),
            Some(_) => {}
            None => tracing::debug!("Skipping {} for wallet registration", key),
        }
    }

    networks
}
