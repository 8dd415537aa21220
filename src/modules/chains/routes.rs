use axum::{routing::get, Router};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn chain_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/readable", get(controller::list_readable))
        .route("/readable/{key}", get(controller::get_readable))
        .route("/writable", get(controller::list_writable))
        .route("/writable/{key}", get(controller::get_writable))
        .route("/remote", get(controller::list_remote_chains))
        .route("/oracles", get(controller::list_oracle_chains))
}

pub fn wallet_routes() -> Router<Arc<AppState>> {
    Router::new().route("/networks", get(controller::list_wallet_networks))
}

pub fn oracle_routes() -> Router<Arc<AppState>> {
    Router::new().route("/network", get(controller::get_oracle_network))
}
