use alloy::primitives::Address;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Execution/account model family of a chain
///
/// The registry carries the string tag, wire payloads carry the compact
/// integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Architecture {
    /// Placeholder for chains the oracle cannot serve
    #[default]
    Unsupported,
    /// Bitcoin-style UTXO chains
    Utxo,
    /// Ethereum-compatible chains
    Evm,
    /// Solana virtual machine chains
    Svm,
}

impl Architecture {
    pub const ALL: [Architecture; 4] = [
        Architecture::Unsupported,
        Architecture::Utxo,
        Architecture::Evm,
        Architecture::Svm,
    ];

    /// Integer code used as the schema key and in oracle payloads (`systemid`)
    pub const fn code(self) -> u8 {
        match self {
            Architecture::Unsupported => 0,
            Architecture::Utxo => 1,
            Architecture::Evm => 2,
            Architecture::Svm => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|arch| arch.code() == code)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Architecture::Unsupported => "unsupported",
            Architecture::Utxo => "btc",
            Architecture::Evm => "evm",
            Architecture::Svm => "svm",
        }
    }

    /// Unknown tags map to `Unsupported` so callers can branch uniformly
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "evm" => Architecture::Evm,
            "btc" | "utxo" => Architecture::Utxo,
            "svm" => Architecture::Svm,
            _ => Architecture::Unsupported,
        }
    }

    /// Whether an oracle contract of `version` can exist on this architecture
    pub fn supports_version(self, version: OracleVersion) -> bool {
        match self {
            Architecture::Evm => true,
            Architecture::Utxo | Architecture::Svm => version == OracleVersion::V2,
            Architecture::Unsupported => false,
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Architecture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Architecture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Architecture::from_tag(&tag))
    }
}

/// Protocol version of the on-chain gas price oracle contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OracleVersion {
    V1 = 1,
    V2 = 2,
}

impl OracleVersion {
    pub const ALL: [OracleVersion; 2] = [OracleVersion::V1, OracleVersion::V2];

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_u8() == value)
    }
}

impl Serialize for OracleVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

struct OracleVersionVisitor;

impl<'de> de::Visitor<'de> for OracleVersionVisitor {
    type Value = OracleVersion;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an oracle version such as 1, \"1\" or \"v1\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(OracleVersion::from_u8)
            .ok_or_else(|| E::custom(format!("unknown oracle version: {}", value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map_err(|_| E::custom(format!("unknown oracle version: {}", value)))
            .and_then(|v| self.visit_u64(v))
    }

    // Map keys arrive as strings
    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value
            .trim_start_matches(['v', 'V'])
            .parse::<u8>()
            .ok()
            .and_then(OracleVersion::from_u8)
            .ok_or_else(|| E::custom(format!("unknown oracle version: {}", value)))
    }
}

impl<'de> Deserialize<'de> for OracleVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OracleVersionVisitor)
    }
}

/// Oracle contract addresses keyed by protocol version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractsByVersion(BTreeMap<OracleVersion, Address>);

impl ContractsByVersion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, version: OracleVersion) -> Option<Address> {
        self.0.get(&version).copied()
    }

    /// Inserts only when the version has no address yet
    pub fn insert_if_absent(&mut self, version: OracleVersion, address: Address) {
        self.0.entry(version).or_insert(address);
    }

    pub fn versions(&self) -> impl Iterator<Item = OracleVersion> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OracleVersion, Address)> + '_ {
        self.0.iter().map(|(v, a)| (*v, *a))
    }

    /// Highest deployed version, which is what a writer should target
    pub fn latest(&self) -> Option<(OracleVersion, Address)> {
        self.0.iter().next_back().map(|(v, a)| (*v, *a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(OracleVersion, Address)> for ContractsByVersion {
    fn from_iter<I: IntoIterator<Item = (OracleVersion, Address)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One supported network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEntry {
    pub chain_id: u64,
    pub label: String,
    #[serde(rename = "arch", default)]
    pub architecture: Architecture,
    /// Required only for write-capable chains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_url: Option<String>,
    #[serde(default)]
    pub testnet: bool,
    /// Readable chains served by the v2 oracle
    #[serde(default)]
    pub v2_supported: bool,
    #[serde(default, alias = "addressByVersion")]
    pub contracts_by_version: ContractsByVersion,
}

impl ChainEntry {
    pub fn contract(&self, version: OracleVersion) -> Option<Address> {
        self.contracts_by_version.get(version)
    }

    pub fn is_write_capable(&self) -> bool {
        self.rpc_url.is_some() && !self.contracts_by_version.is_empty()
    }
}

/// Wire shape of an oracle chain descriptor.
///
/// Older payloads carry `contract` (v1) and `v2Contract` (v2) next to, or
/// instead of, the version map, and usually no `arch`. Oracle chains without
/// one are EVM.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OracleChainWire {
    #[serde(flatten)]
    chain: ChainEntry,
    #[serde(default)]
    arch: Option<Architecture>,
    #[serde(default)]
    contract: Option<Address>,
    #[serde(default)]
    v2_contract: Option<Address>,
}

/// Chain descriptor returned by the oracle-chain metadata endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OracleChainWire")]
pub struct OracleChainEntry {
    #[serde(flatten)]
    pub chain: ChainEntry,
}

impl From<OracleChainWire> for OracleChainEntry {
    fn from(wire: OracleChainWire) -> Self {
        let mut chain = wire.chain;
        chain.architecture = wire.arch.unwrap_or(Architecture::Evm);
        if let Some(address) = wire.contract {
            chain.contracts_by_version.insert_if_absent(OracleVersion::V1, address);
        }
        if let Some(address) = wire.v2_contract {
            chain.contracts_by_version.insert_if_absent(OracleVersion::V2, address);
        }
        Self { chain }
    }
}

impl From<OracleChainEntry> for ChainEntry {
    fn from(entry: OracleChainEntry) -> Self {
        entry.chain
    }
}

/// Which registry namespace an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    Readable,
    Writable,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Chain not found: {0}")]
    NotFound(String),

    #[error("Duplicate chain id {chain_id} for {key}")]
    DuplicateChainId { key: String, chain_id: u64 },

    #[error("Invalid chain id for {0}")]
    InvalidChainId(String),

    #[error("Writable chain {0} has no RPC URL")]
    MissingRpcUrl(String),

    #[error("Writable chain {0} has no oracle contracts")]
    NoContracts(String),

    #[error("Chain {key} ({architecture}) cannot host an oracle v{version} contract")]
    UnsupportedVersion {
        key: String,
        architecture: Architecture,
        version: u8,
    },
}
