use gas_oracle_shared::config::Config;
use gas_oracle_shared::services::chains::{readable_chains, writable_chains};
use gas_oracle_shared::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gas_oracle_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");

    for registry in [readable_chains(), writable_chains()] {
        if let Err(e) = registry.validate() {
            tracing::error!("Invalid {:?} chain registry: {}", registry.kind(), e);
        }
    }
    tracing::info!(
        "Loaded {} readable and {} writable chains",
        readable_chains().len(),
        writable_chains().len()
    );

    let state = AppState::from_config(&config);
    let app = gas_oracle_shared::create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.unwrap();
}
