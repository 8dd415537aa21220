use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::schema::{ChainErrorResponse, ChainListResponse, ChainListSource, ChainResponse};
use crate::config::OracleNetwork;
use crate::services::chains::{
    readable_chains, writable_chains, ChainEntry, ChainRegistry, RegistryKind, WalletNetwork,
};
use crate::AppState;

type ChainResult<T> = Result<Json<T>, (StatusCode, Json<ChainErrorResponse>)>;

fn list(registry: &ChainRegistry) -> Json<Vec<ChainResponse>> {
    Json(
        registry
            .iter()
            .map(|(key, chain)| ChainResponse::new(key, chain))
            .collect(),
    )
}

fn lookup(registry: &ChainRegistry, key: &str) -> ChainResult<ChainResponse> {
    registry
        .get(key)
        .map(|chain| Json(ChainResponse::new(key, chain)))
        .map_err(|e| {
            (
                StatusCode::NOT_FOUND,
                Json(ChainErrorResponse::new(e.to_string())),
            )
        })
}

fn static_listing(registry: &ChainRegistry) -> Json<ChainListResponse> {
    Json(ChainListResponse {
        source: ChainListSource::Static,
        chains: registry.all().cloned().collect(),
    })
}

// =============================================================================
// GET /chains/readable, /chains/writable - Static registries
// =============================================================================

pub async fn list_readable() -> Json<Vec<ChainResponse>> {
    list(readable_chains())
}

pub async fn list_writable() -> Json<Vec<ChainResponse>> {
    list(writable_chains())
}

pub async fn get_readable(Path(key): Path<String>) -> ChainResult<ChainResponse> {
    lookup(readable_chains(), &key)
}

pub async fn get_writable(Path(key): Path<String>) -> ChainResult<ChainResponse> {
    lookup(writable_chains(), &key)
}

// =============================================================================
// GET /chains/remote - Chain metadata API, static readable registry on failure
// =============================================================================

pub async fn list_remote_chains(State(state): State<Arc<AppState>>) -> Json<ChainListResponse> {
    match state.chain_source.fetch_chains().await {
        Ok(chains) => Json(ChainListResponse {
            source: ChainListSource::Remote,
            chains,
        }),
        Err(e) => {
            tracing::warn!("Serving static readable chains: {}", e);
            static_listing(readable_chains())
        }
    }
}

// =============================================================================
// GET /chains/oracles - Oracle chain API, static writable registry on failure
// =============================================================================

pub async fn list_oracle_chains(State(state): State<Arc<AppState>>) -> Json<ChainListResponse> {
    let fetched = match state.chain_source.fetch_oracle_chains().await {
        Ok(chains) => chains,
        Err(e) => {
            tracing::warn!("Serving static writable chains: {}", e);
            return static_listing(writable_chains());
        }
    };

    let entries: Vec<(String, ChainEntry)> = fetched
        .into_iter()
        .map(ChainEntry::from)
        .map(|chain| (chain.chain_id.to_string(), chain))
        .collect();

    // Remote entries must satisfy the same invariants as the static table
    match ChainRegistry::new(RegistryKind::Writable, entries) {
        Ok(registry) => Json(ChainListResponse {
            source: ChainListSource::Remote,
            chains: registry.all().cloned().collect(),
        }),
        Err(e) => {
            tracing::warn!("Rejecting remote oracle chains: {}", e);
            static_listing(writable_chains())
        }
    }
}

// =============================================================================
// GET /wallet/networks, /oracle/network
// =============================================================================

pub async fn list_wallet_networks(State(state): State<Arc<AppState>>) -> Json<Vec<WalletNetwork>> {
    Json(state.wallet_networks.clone())
}

pub async fn get_oracle_network(State(state): State<Arc<AppState>>) -> Json<OracleNetwork> {
    Json(state.oracle_network.clone())
}
