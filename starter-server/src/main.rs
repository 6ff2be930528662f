//! Starter Server - versioned root endpoint over HTTP

use anyhow::{Context, Result};
use starter_server::{config::ServerConfig, routes, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starter_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.strategy);

    // Build router
    let app = routes::create_router(state, &config.cors_origins);

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!(
        strategy = %config.strategy,
        header = config.strategy.header_name(),
        "Starting server on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
