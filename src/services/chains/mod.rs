pub mod registry;
pub mod types;
pub mod wallet;

pub use registry::{
    lookup_readable, lookup_writable, readable_chains, resolve_readable, unsupported_chain,
    writable_chains, ChainRegistry, DEFAULT_READABLE_KEY, UNSUPPORTED_CHAIN_ID,
    UNSUPPORTED_CHAIN_KEY,
};
pub use types::{
    Architecture, ChainEntry, ContractsByVersion, OracleChainEntry, OracleVersion, RegistryError,
    RegistryKind,
};
pub use wallet::{wallet_networks, WalletNetwork};
