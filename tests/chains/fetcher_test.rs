/// Remote Chain Fetcher Tests
///
/// Runs the fetcher against a local axum upstream so no external network
/// access is needed.
use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use gas_oracle_shared::services::chain_fetcher::{ChainFetcher, ChainSource, FetchError};
use gas_oracle_shared::services::chains::{Architecture, OracleVersion};

use crate::common::spawn_upstream;

fn upstream() -> Router {
    Router::new()
        .route(
            "/chains",
            get(|| async {
                Json(json!([
                    {"chainId": 1, "label": "Ethereum", "arch": "evm", "v2Supported": true},
                    {"chainId": 8453, "label": "Base", "arch": "evm"},
                    {"chainId": 0, "label": "Bitcoin", "arch": "btc"}
                ]))
            }),
        )
        .route(
            "/oracles",
            get(|| async {
                Json(json!([
                    {
                        "chainId": 59141,
                        "label": "Linea Sepolia",
                        "rpcUrl": "https://linea-sepolia-rpc.publicnode.com",
                        "testnet": true,
                        "contract": "0x1a3d7A0bD9585B730e615aE0fD9a2294C33Df1E1",
                        "v2Contract": "0xb690C4CbDE4747FD614477Ab24c7630C5aAa6Ec5"
                    }
                ]))
            }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route("/garbage", get(|| async { "<html>not json</html>" }))
}

#[tokio::test]
async fn fetch_chains_decodes_descriptors() {
    let base = spawn_upstream(upstream()).await;
    let fetcher = ChainFetcher::new(format!("{}/chains", base), format!("{}/oracles", base));

    let chains = fetcher.fetch_chains().await.unwrap();
    assert_eq!(chains.len(), 3);
    assert!(chains[0].v2_supported);
    assert_eq!(chains[1].label, "Base");
    assert_eq!(chains[2].architecture, Architecture::Utxo);
}

#[tokio::test]
async fn fetch_oracle_chains_folds_legacy_contracts() {
    let base = spawn_upstream(upstream()).await;
    let fetcher = ChainFetcher::new(format!("{}/chains", base), format!("{}/oracles", base));

    let chains = fetcher.fetch_oracle_chains().await.unwrap();
    assert_eq!(chains.len(), 1);
    let linea = &chains[0].chain;
    assert_eq!(linea.architecture, Architecture::Evm);
    assert!(linea.testnet);
    assert_eq!(
        linea.contracts_by_version.versions().collect::<Vec<_>>(),
        vec![OracleVersion::V1, OracleVersion::V2]
    );
}

#[tokio::test]
async fn non_success_status_is_fetch_failure() {
    let base = spawn_upstream(upstream()).await;
    let fetcher = ChainFetcher::new(format!("{}/broken", base), format!("{}/broken", base));

    assert!(matches!(fetcher.fetch_chains().await, Err(FetchError::Status(500))));
    assert!(matches!(
        fetcher.fetch_oracle_chains().await,
        Err(FetchError::Status(500))
    ));
}

#[tokio::test]
async fn unparseable_body_is_fetch_failure() {
    let base = spawn_upstream(upstream()).await;
    let fetcher = ChainFetcher::new(format!("{}/garbage", base), format!("{}/garbage", base));

    assert!(matches!(fetcher.fetch_chains().await, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn missing_route_is_fetch_failure() {
    let base = spawn_upstream(upstream()).await;
    let fetcher = ChainFetcher::new(format!("{}/nope", base), format!("{}/nope", base));

    assert!(matches!(fetcher.fetch_chains().await, Err(FetchError::Status(404))));
}
