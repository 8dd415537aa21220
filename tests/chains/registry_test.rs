/// Chain Registry Tests
///
/// Invariants of the static readable and writable registries.
use std::collections::HashSet;

use gas_oracle_shared::services::chains::{
    lookup_readable, lookup_writable, readable_chains, resolve_readable, unsupported_chain,
    writable_chains, Architecture, OracleVersion, RegistryError, UNSUPPORTED_CHAIN_ID,
};
use gas_oracle_shared::services::estimation::CodeSelector;

#[test]
fn every_writable_chain_is_write_capable() {
    for (key, _) in writable_chains().iter() {
        let entry = lookup_writable(key).unwrap();
        assert!(entry.chain_id > 0, "{} has no chain id", key);
        assert!(
            !entry.contracts_by_version.is_empty(),
            "{} has no oracle contracts",
            key
        );
        assert!(entry.rpc_url.is_some(), "{} has no RPC URL", key);
        assert!(entry.is_write_capable());
    }
}

#[test]
fn unknown_keys_are_not_found() {
    for key in ["", "mainnet-ish", "SEPOLIA", "unsupported"] {
        assert_eq!(
            lookup_writable(key).unwrap_err(),
            RegistryError::NotFound(key.to_string())
        );
        assert!(lookup_readable(key).is_err());
    }
}

#[test]
fn chain_ids_unique_per_registry() {
    for registry in [readable_chains(), writable_chains()] {
        let ids: HashSet<u64> = registry.all().map(|c| c.chain_id).collect();
        assert_eq!(ids.len(), registry.len());
    }
}

#[test]
fn sentinel_is_distinguishable() {
    let sentinel = unsupported_chain();
    assert_eq!(sentinel.chain_id, UNSUPPORTED_CHAIN_ID);
    assert_eq!(sentinel.architecture, Architecture::Unsupported);

    let real_chains = readable_chains()
        .all()
        .chain(writable_chains().all())
        .filter(|c| c.architecture != Architecture::Unsupported);
    for entry in real_chains {
        assert_ne!(entry.chain_id, UNSUPPORTED_CHAIN_ID, "{} collides", entry.label);
    }

    assert_eq!(resolve_readable("does-not-exist"), sentinel);
}

#[test]
fn declaration_order_is_preserved() {
    let keys: Vec<&str> = writable_chains().keys().collect();
    assert_eq!(
        keys,
        vec!["devnet", "sepolia", "opSepolia", "baseSepolia", "lineaSepolia"]
    );
}

#[test]
fn linea_sepolia_hosts_both_oracle_versions() {
    let linea = lookup_writable("lineaSepolia").unwrap();
    assert!(linea.contract(OracleVersion::V1).is_some());
    assert!(linea.contract(OracleVersion::V2).is_some());
    assert_eq!(
        linea.contracts_by_version.latest().map(|(v, _)| v),
        Some(OracleVersion::V2)
    );
}

#[test]
fn sepolia_end_to_end_selection() {
    let sepolia = lookup_writable("sepolia").unwrap();
    assert_eq!(sepolia.architecture, Architecture::Evm);
    assert_eq!(sepolia.chain_id, 11155111);

    let codes = CodeSelector::default().select_for_chain(sepolia);
    assert_eq!(codes, vec![107, 322]);
}

#[test]
fn only_mainnet_is_v2_supported_by_default() {
    let v2: Vec<u64> = readable_chains()
        .all()
        .filter(|c| c.v2_supported)
        .map(|c| c.chain_id)
        .collect();
    assert_eq!(v2, vec![1]);
}

#[test]
fn immutable_and_opbnb_use_real_chain_ids() {
    assert_eq!(lookup_readable("immutablezkenv").unwrap().chain_id, 13371);
    assert_eq!(lookup_readable("opbnb").unwrap().chain_id, 204);
}
