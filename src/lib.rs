pub mod config;
pub mod modules;
pub mod services;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::{Config, OracleNetwork};
use modules::chains::{chain_routes, oracle_routes, wallet_routes};
use modules::estimation::{codes_routes, estimation_routes, schema_routes};
use services::chain_fetcher::{ChainFetcher, ChainSource};
use services::chains::{wallet_networks, writable_chains, WalletNetwork};
use services::estimation::CodeSelector;

/// Dependencies shared by every handler, built once at startup
pub struct AppState {
    pub chain_source: Arc<dyn ChainSource>,
    pub selector: CodeSelector,
    pub wallet_networks: Vec<WalletNetwork>,
    pub oracle_network: OracleNetwork,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            chain_source: Arc::new(ChainFetcher::from_config(config)),
            selector: CodeSelector::new(config.blob_fee_chain_ids.iter().copied()),
            wallet_networks: wallet_networks(writable_chains(), config.mainnet_rpc_url.as_deref()),
            oracle_network: config.oracle_network.clone(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/chains", chain_routes())
        .nest("/wallet", wallet_routes())
        .nest("/oracle", oracle_routes())
        .nest("/schema", schema_routes())
        .nest("/estimations", estimation_routes())
        .merge(codes_routes())
        .layer(RequestBodyLimitLayer::new(1024 * 64)) // 64KB max body
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Gas Oracle API"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
