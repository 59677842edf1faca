//! Stitchwise Web Server
//!
//! Run with: cargo run -p stitchwise-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Stitchwise Web Server...");

    let config = stitchwise_web::config::Config::load()?;

    // Create app state
    let state = stitchwise_web::state::AppState::new(&config);

    // Build router
    let app = stitchwise_web::router::build_router(state);

    // Bind to the configured address
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Analyzer service expected at {}", config.analyzer.base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
