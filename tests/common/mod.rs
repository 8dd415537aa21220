use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;

use gas_oracle_shared::config::load_oracle_network;
use gas_oracle_shared::services::chain_fetcher::{ChainSource, FetchError};
use gas_oracle_shared::services::chains::{
    wallet_networks, writable_chains, ChainEntry, OracleChainEntry,
};
use gas_oracle_shared::services::estimation::CodeSelector;
use gas_oracle_shared::AppState;

/// Canned chain source standing in for the metadata API
#[allow(dead_code)]
#[derive(Default)]
pub struct StubChainSource {
    pub chains: Option<Vec<ChainEntry>>,
    pub oracle_chains: Option<Vec<OracleChainEntry>>,
}

#[async_trait]
impl ChainSource for StubChainSource {
    async fn fetch_chains(&self) -> Result<Vec<ChainEntry>, FetchError> {
        self.chains.clone().ok_or(FetchError::Status(503))
    }

    async fn fetch_oracle_chains(&self) -> Result<Vec<OracleChainEntry>, FetchError> {
        self.oracle_chains.clone().ok_or(FetchError::Status(503))
    }
}

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
}

#[allow(dead_code)]
impl TestContext {
    /// Server whose upstream chain API is down
    pub fn new() -> Self {
        Self::with_source(StubChainSource::default())
    }

    pub fn with_source(source: StubChainSource) -> Self {
        let state = AppState {
            chain_source: Arc::new(source),
            selector: CodeSelector::default(),
            wallet_networks: wallet_networks(writable_chains(), Some("https://eth.llamarpc.com")),
            oracle_network: load_oracle_network(),
        };
        let app = gas_oracle_shared::create_app(state);
        let server = TestServer::new(app).expect("Failed to create test server");

        Self { server }
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
#[allow(dead_code)]
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream listener");
    let addr = listener.local_addr().expect("Upstream has no local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn chain(chain_id: u64, label: &str, arch: &str) -> ChainEntry {
    serde_json::from_value(serde_json::json!({
        "chainId": chain_id,
        "label": label,
        "arch": arch,
    }))
    .expect("Invalid test chain")
}
