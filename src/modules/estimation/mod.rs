pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::{codes_routes, estimation_routes, schema_routes};
