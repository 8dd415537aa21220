use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::controller;
use crate::AppState;

pub fn schema_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quantiles", get(controller::list_quantiles))
        .route("/fields/{code}", get(controller::get_field))
        .route("/display-codes", get(controller::get_display_codes))
}

pub fn codes_routes() -> Router<Arc<AppState>> {
    Router::new().route("/codes", get(controller::select_codes))
}

pub fn estimation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/normalize", post(controller::normalize))
        .route("/decode", post(controller::decode))
}
