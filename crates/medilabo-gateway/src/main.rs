use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medilabo_gateway::{router, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::parse();
    let state = GatewayState::from_config(&config).context("failed to set up gateway")?;

    for route in config.routes() {
        info!(service = %route.service, upstream = %route.upstream, "route");
    }
    info!(listen = %config.listen, users = state.users.len(), "starting gateway");

    let listener = TcpListener::bind(config.listen)
        .await
        .context("failed to bind TCP listener")?;

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
