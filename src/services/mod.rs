pub mod chain_fetcher;
pub mod chains;
pub mod estimation;
pub mod preferences;
pub mod schema;
