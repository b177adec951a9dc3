use std::error::Error;

use tracing_subscriber::EnvFilter;

use explorer_server::cache::CacheConfig;
use explorer_server::catalog::Catalog;
use explorer_server::config::ServerConfig;
use explorer_server::transfer::{TransferTable, taipei_transfers};
use explorer_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // Load the catalog (fail fast if the documents are missing)
    let catalog = Catalog::load(&config.lines_path, &config.places_path)?;

    let transfers = match &config.transfers_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            TransferTable::from_json(&json)?
        }
        None => taipei_transfers(),
    };
    tracing::info!(groups = transfers.len(), "loaded transfer table");

    let cache_config = CacheConfig {
        ttl: config.cache_ttl,
        max_capacity: config.cache_capacity,
    };
    let state = AppState::new(catalog, transfers, &cache_config);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    tracing::info!("Metro place explorer listening on http://{addr}");
    tracing::info!("  GET  /health     - Health check");
    tracing::info!("  GET  /places     - Places around a station");
    tracing::info!("  GET  /api/lines  - Lines and stations");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
