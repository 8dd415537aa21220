use alloy::primitives::address;
use lazy_static::lazy_static;
use std::collections::HashMap;

use super::types::{
    Architecture, ChainEntry, ContractsByVersion, OracleVersion, RegistryError, RegistryKind,
};

/// Key of the sentinel entry standing in for "no valid chain"
pub const UNSUPPORTED_CHAIN_KEY: &str = "unsupportedChain";
pub const UNSUPPORTED_CHAIN_ID: u64 = 1638;

/// Readable chain selected when nothing else resolves
pub const DEFAULT_READABLE_KEY: &str = "main";

/// Ordered chain table for one namespace
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    kind: RegistryKind,
    entries: Vec<(String, ChainEntry)>,
}

impl ChainRegistry {
    /// Build a registry and check its invariants
    pub fn new(
        kind: RegistryKind,
        entries: Vec<(String, ChainEntry)>,
    ) -> Result<Self, RegistryError> {
        let registry = Self { kind, entries };
        registry.validate()?;
        Ok(registry)
    }

    fn from_static(kind: RegistryKind, entries: Vec<(&'static str, ChainEntry)>) -> Self {
        Self {
            kind,
            entries: entries
                .into_iter()
                .map(|(key, entry)| (key.to_string(), entry))
                .collect(),
        }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn get(&self, key: &str) -> Result<&ChainEntry, RegistryError> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
            .ok_or_else(|| RegistryError::NotFound(key.to_string()))
    }

    pub fn by_chain_id(&self, chain_id: u64) -> Option<&ChainEntry> {
        self.all().find(|entry| entry.chain_id == chain_id)
    }

    /// Entries in declaration order
    pub fn all(&self) -> impl Iterator<Item = &ChainEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChainEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen: HashMap<u64, &str> = HashMap::new();

        for (key, entry) in &self.entries {
            if seen.insert(entry.chain_id, key).is_some() {
                return Err(RegistryError::DuplicateChainId {
                    key: key.clone(),
                    chain_id: entry.chain_id,
                });
            }

            for version in entry.contracts_by_version.versions() {
                if !entry.architecture.supports_version(version) {
                    return Err(RegistryError::UnsupportedVersion {
                        key: key.clone(),
                        architecture: entry.architecture,
                        version: version.as_u8(),
                    });
                }
            }

            if self.kind == RegistryKind::Writable {
                if entry.chain_id == 0 {
                    return Err(RegistryError::InvalidChainId(key.clone()));
                }
                if entry.rpc_url.as_deref().map_or(true, str::is_empty) {
                    return Err(RegistryError::MissingRpcUrl(key.clone()));
                }
                if entry.contracts_by_version.is_empty() {
                    return Err(RegistryError::NoContracts(key.clone()));
                }
            }
        }

        Ok(())
    }
}

fn read_chain(chain_id: u64, label: &str) -> ChainEntry {
    ChainEntry {
        chain_id,
        label: label.to_string(),
        architecture: Architecture::Evm,
        rpc_url: None,
        block_explorer_url: None,
        testnet: false,
        v2_supported: false,
        contracts_by_version: ContractsByVersion::new(),
    }
}

fn write_chain(
    chain_id: u64,
    label: &str,
    rpc_url: &str,
    block_explorer_url: &str,
    contracts: ContractsByVersion,
) -> ChainEntry {
    ChainEntry {
        chain_id,
        label: label.to_string(),
        architecture: Architecture::Evm,
        rpc_url: Some(rpc_url.to_string()),
        block_explorer_url: Some(block_explorer_url.to_string()),
        testnet: true,
        v2_supported: false,
        contracts_by_version: contracts,
    }
}

fn unsupported_chain_entry() -> ChainEntry {
    ChainEntry {
        architecture: Architecture::Unsupported,
        ..read_chain(UNSUPPORTED_CHAIN_ID, "Unsupported Chain")
    }
}

fn readable_registry() -> ChainRegistry {
    ChainRegistry::from_static(
        RegistryKind::Readable,
        vec![
            ("arb", read_chain(42161, "Arbitrum")),
            ("avalanche", read_chain(43114, "Avalanche")),
            ("base", read_chain(8453, "Base")),
            ("blast", read_chain(81457, "Blast")),
            ("bob", read_chain(60808, "BOB")),
            ("bsc", read_chain(56, "BNB Smart Chain")),
            ("chiliz", read_chain(88888, "Chiliz")),
            ("cronos", read_chain(25, "Cronos")),
            (
                "main",
                ChainEntry {
                    v2_supported: true,
                    ..read_chain(1, "Ethereum")
                },
            ),
            ("fantom", read_chain(250, "Fantom")),
            ("fraxtal", read_chain(252, "Fraxtal")),
            ("gnosis", read_chain(100, "Gnosis")),
            // Real ids; the published oracle constants swap immutablezkenv and opbnb
            ("immutablezkenv", read_chain(13371, "Immutable zkEVM")),
            ("ink", read_chain(57073, "Ink")),
            (
                "lenssepolia",
                ChainEntry {
                    testnet: true,
                    ..read_chain(37111, "Lens Sepolia")
                },
            ),
            ("linea", read_chain(59144, "Linea")),
            ("lisk", read_chain(1135, "Lisk")),
            ("mantle", read_chain(5000, "Mantle")),
            ("metis", read_chain(1088, "Metis")),
            ("mode", read_chain(34443, "Mode")),
            ("moonbeam", read_chain(1284, "Moonbeam")),
            ("op", read_chain(10, "Optimism")),
            ("opbnb", read_chain(204, "opBNB")),
            ("palm", read_chain(11297108109, "Palm")),
            ("polygon", read_chain(137, "Polygon")),
            ("polygonzkevm", read_chain(1101, "Polygon zkEVM")),
            ("ronin", read_chain(2020, "Ronin")),
            ("rootstock", read_chain(30, "Rootstock")),
            ("scroll", read_chain(534352, "Scroll")),
            ("sei", read_chain(1329, "SEI")),
            ("snax", read_chain(2192, "SnaxChain")),
            ("taiko", read_chain(167000, "Taiko")),
            ("worldchain", read_chain(480, "World Chain")),
            ("zetachain", read_chain(7000, "ZetaChain")),
            ("zksync", read_chain(324, "zkSync")),
            ("zora", read_chain(7777777, "Zora")),
            // New chains go above the sentinel
            (UNSUPPORTED_CHAIN_KEY, unsupported_chain_entry()),
        ],
    )
}

fn writable_registry() -> ChainRegistry {
    let v1_testnet_oracle = address!("1a3d7A0bD9585B730e615aE0fD9a2294C33Df1E1");

    ChainRegistry::from_static(
        RegistryKind::Writable,
        vec![
            (
                "devnet",
                write_chain(
                    19735516467,
                    "Gas Devnet",
                    "https://http-rpc.devnet.gas.network",
                    "https://explorer.devnet.gas.network",
                    [(OracleVersion::V2, address!("3277023a8577dDc27d65efBC2536d550F3011818"))]
                        .into_iter()
                        .collect(),
                ),
            ),
            (
                "sepolia",
                write_chain(
                    11155111,
                    "Ethereum Sepolia",
                    "https://endpoints.omniatech.io/v1/eth/sepolia/public",
                    "https://sepolia.etherscan.io",
                    [(OracleVersion::V1, address!("E4859432d9Af6D40C2D923e3F13D66057F4AEcA0"))]
                        .into_iter()
                        .collect(),
                ),
            ),
            (
                "opSepolia",
                write_chain(
                    11155420,
                    "Optimism Sepolia",
                    "https://sepolia.optimism.io",
                    "https://sepolia-optimism.etherscan.io",
                    [(OracleVersion::V1, v1_testnet_oracle)].into_iter().collect(),
                ),
            ),
            (
                "baseSepolia",
                write_chain(
                    84532,
                    "Base Sepolia",
                    "https://sepolia.base.org",
                    "https://sepolia.basescan.org",
                    [(OracleVersion::V1, v1_testnet_oracle)].into_iter().collect(),
                ),
            ),
            (
                "lineaSepolia",
                write_chain(
                    59141,
                    "Linea Sepolia",
                    "https://linea-sepolia-rpc.publicnode.com",
                    "https://sepolia.lineascan.build",
                    [
                        (OracleVersion::V1, v1_testnet_oracle),
                        (OracleVersion::V2, address!("b690C4CbDE4747FD614477Ab24c7630C5aAa6Ec5")),
                    ]
                    .into_iter()
                    .collect(),
                ),
            ),
        ],
    )
}

lazy_static! {
    static ref READABLE_CHAINS: ChainRegistry = readable_registry();
    static ref WRITABLE_CHAINS: ChainRegistry = writable_registry();
    static ref UNSUPPORTED_CHAIN: ChainEntry = unsupported_chain_entry();
}

pub fn readable_chains() -> &'static ChainRegistry {
    &READABLE_CHAINS
}

pub fn writable_chains() -> &'static ChainRegistry {
    &WRITABLE_CHAINS
}

/// The `UnsupportedChain` sentinel
pub fn unsupported_chain() -> &'static ChainEntry {
    &UNSUPPORTED_CHAIN
}

pub fn lookup_readable(key: &str) -> Result<&'static ChainEntry, RegistryError> {
    readable_chains().get(key)
}

pub fn lookup_writable(key: &str) -> Result<&'static ChainEntry, RegistryError> {
    writable_chains().get(key)
}

/// Readable lookup that never comes back empty-handed
pub fn resolve_readable(key: &str) -> &'static ChainEntry {
    match lookup_readable(key) {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!("{}, using unsupported chain sentinel", e);
            unsupported_chain()
        }
    }
}
