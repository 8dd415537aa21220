use std::collections::BTreeSet;

use crate::services::chains::{Architecture, ChainEntry};

/// General EVM selection: base fee and p90 priority fee
pub const EVM_CODES: &[u32] = &[107, 322];
/// EVM chains with blob transactions also get the blob base fee
pub const EVM_BLOB_FEE_CODES: &[u32] = &[107, 112, 322];
pub const UTXO_CODES: &[u32] = &[107];
pub const SVM_CODES: &[u32] = &[107, 322];

/// Chains known to support blob transactions
pub const DEFAULT_BLOB_FEE_CHAIN_IDS: &[u64] = &[1];

/// Picks the metric codes relevant to an architecture and chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSelector {
    blob_fee_chains: BTreeSet<u64>,
}

impl Default for CodeSelector {
    fn default() -> Self {
        Self::new(DEFAULT_BLOB_FEE_CHAIN_IDS.iter().copied())
    }
}

impl CodeSelector {
    pub fn new(blob_fee_chain_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            blob_fee_chains: blob_fee_chain_ids.into_iter().collect(),
        }
    }

    pub fn supports_blob_fees(&self, chain_id: u64) -> bool {
        self.blob_fee_chains.contains(&chain_id)
    }

    pub fn blob_fee_chains(&self) -> impl Iterator<Item = u64> + '_ {
        self.blob_fee_chains.iter().copied()
    }

    /// Codes for `arch_code`, ascending. Unknown architectures get an empty set.
    pub fn select(&self, arch_code: u8, chain_id: Option<u64>) -> Vec<u32> {
        let codes: &[u32] = match Architecture::from_code(arch_code) {
            Some(Architecture::Evm) => match chain_id {
                Some(id) if self.supports_blob_fees(id) => EVM_BLOB_FEE_CODES,
                _ => EVM_CODES,
            },
            Some(Architecture::Utxo) => UTXO_CODES,
            Some(Architecture::Svm) => SVM_CODES,
            Some(Architecture::Unsupported) | None => &[],
        };
        codes.to_vec()
    }

    pub fn select_for_chain(&self, entry: &ChainEntry) -> Vec<u32> {
        self.select(entry.architecture.code(), Some(entry.chain_id))
    }
}

/// [`CodeSelector::select`] with the default blob-fee allow-list
pub fn select_codes_for_architecture(arch_code: u8, chain_id: Option<u64>) -> Vec<u32> {
    CodeSelector::default().select(arch_code, chain_id)
}
