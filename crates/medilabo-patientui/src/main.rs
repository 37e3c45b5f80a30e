use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medilabo_patientui::{connect, router, PortalConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PortalConfig::parse();
    let controller = connect(&config).context("failed to set up backend clients")?;
    let app = router(controller);

    info!(
        listen = %config.listen,
        patients = %config.patient_service_url,
        notes = %config.note_service_url,
        risk = %config.risk_service_url,
        service_user = config.credential().username(),
        "starting patient UI"
    );

    let listener = TcpListener::bind(config.listen)
        .await
        .context("failed to bind TCP listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
