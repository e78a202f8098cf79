use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, storage_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront cart service entry point
///
/// Loads configuration, restores the persisted cart, wires the adapters
/// into the cart use cases and serves the HTTP API.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize cart storage
    let storage = storage_config::init_storage(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(storage, &config.storefront).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
