pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::{chain_routes, oracle_routes, wallet_routes};
