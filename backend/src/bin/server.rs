//! Sustainability KPI HTTP Server Binary
//!
//! Main entry point for the mock KPI REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin sustainability-server
//!
//! # Advertise absolute URLs in the tool manifest
//! PUBLIC_BASE_URL=https://kpi.example.org cargo run --bin sustainability-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PUBLIC_BASE_URL`: Base URL used in the tool manifest (default: relative paths)
//! - `SERVER_CONFIG`: Path to a `server.toml` file
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use sustainability_api::config::ServerConfig;
use sustainability_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting sustainability KPI server");

    let config = ServerConfig::load()?;
    let addr = config.bind_addr()?;
    match config.public_base_url() {
        Some(url) => info!("Tool manifest advertises base URL {}", url),
        None => info!("Tool manifest advertises relative paths"),
    }

    let state = AppState::new(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Tool manifest: http://{}/opal-tool-registry", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
