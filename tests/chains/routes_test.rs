/// Chain Route Tests
///
/// HTTP surface over the static registries and the remote chain source.
use axum::http::StatusCode;
use serde_json::Value;

use gas_oracle_shared::services::chains::{writable_chains, OracleChainEntry};

use crate::common::{chain, StubChainSource, TestContext};

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_list_writable_chains() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/chains/writable").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    let chains = json.as_array().unwrap();
    assert_eq!(chains.len(), writable_chains().len());
    assert_eq!(chains[0]["key"], "devnet");

    for chain in chains {
        assert!(chain["chainId"].as_u64().unwrap() > 0);
        assert!(!chain["contractsByVersion"].as_object().unwrap().is_empty());
        assert!(chain["rpcUrl"].is_string());
    }
}

#[tokio::test]
async fn test_get_writable_chain() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/chains/writable/sepolia").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    assert_eq!(json["key"], "sepolia");
    assert_eq!(json["chainId"], 11155111);
    assert_eq!(json["arch"], "evm");
    assert_eq!(json["testnet"], true);
    assert!(json["contractsByVersion"]["1"].is_string());
}

#[tokio::test]
async fn test_unknown_chain_is_404() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/chains/writable/nowhere").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json = response.json::<Value>();
    assert!(json["error"].as_str().unwrap().contains("nowhere"));

    let response = ctx.server.get("/chains/readable/nowhere").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_readable_includes_sentinel() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/chains/readable").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    let chains = json.as_array().unwrap();
    let last = chains.last().unwrap();
    assert_eq!(last["key"], "unsupportedChain");
    assert_eq!(last["arch"], "unsupported");
}

#[tokio::test]
async fn test_remote_chains_fall_back_to_static() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/chains/remote").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    assert_eq!(json["source"], "static");
    assert!(!json["chains"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_chains_served_when_available() {
    let ctx = TestContext::with_source(StubChainSource {
        chains: Some(vec![chain(1, "Ethereum", "evm"), chain(0, "Bitcoin", "btc")]),
        oracle_chains: None,
    });

    let response = ctx.server.get("/chains/remote").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    assert_eq!(json["source"], "remote");
    let chains = json["chains"].as_array().unwrap();
    assert_eq!(chains.len(), 2);
    assert_eq!(chains[1]["arch"], "btc");
}

#[tokio::test]
async fn test_oracle_chains_validated() {
    // Oracle descriptors typically omit `arch`
    let valid: OracleChainEntry = serde_json::from_value(serde_json::json!({
        "chainId": 84532,
        "label": "Base Sepolia",
        "rpcUrl": "https://sepolia.base.org",
        "contract": "0x1a3d7A0bD9585B730e615aE0fD9a2294C33Df1E1"
    }))
    .unwrap();

    let ctx = TestContext::with_source(StubChainSource {
        chains: None,
        oracle_chains: Some(vec![valid]),
    });
    let json = ctx.server.get("/chains/oracles").await.json::<Value>();
    assert_eq!(json["source"], "remote");
    assert_eq!(json["chains"][0]["chainId"], 84532);
    assert_eq!(json["chains"][0]["arch"], "evm");

    // No RPC URL, so it cannot back a write
    let missing_rpc: OracleChainEntry = serde_json::from_value(serde_json::json!({
        "chainId": 84532,
        "label": "Base Sepolia",
        "arch": "evm",
        "contract": "0x1a3d7A0bD9585B730e615aE0fD9a2294C33Df1E1"
    }))
    .unwrap();

    let ctx = TestContext::with_source(StubChainSource {
        chains: None,
        oracle_chains: Some(vec![missing_rpc]),
    });
    let json = ctx.server.get("/chains/oracles").await.json::<Value>();
    assert_eq!(json["source"], "static");
    assert_eq!(
        json["chains"].as_array().unwrap().len(),
        writable_chains().len()
    );
}

#[tokio::test]
async fn test_wallet_networks() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/wallet/networks").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    let networks = json.as_array().unwrap();
    assert_eq!(networks[0]["id"], "0x1");
    assert!(networks.iter().any(|n| n["id"] == "0xaa36a7"));
    assert!(networks.iter().all(|n| n["token"] == "ETH"));
}

#[tokio::test]
async fn test_oracle_network() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/oracle/network").await;
    response.assert_status(StatusCode::OK);

    let json = response.json::<Value>();
    assert!(json["rpcUrl"].as_str().unwrap().starts_with("http"));
    assert!(json["contractsByVersion"]["2"].is_string());
}
