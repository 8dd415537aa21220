pub mod environment;
pub mod networks;

pub use environment::Config;
pub use networks::{load_oracle_network, OracleNetwork};
