//! Registro intake server
//!
//! Rust/Axum server for the lead registration form.

use clap::Parser;
use registro_api::{build_router, ApiConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::parse();
    let app = build_router(config.state());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        env = %config.environment,
        version = %config.release,
        validate_payload = config.validate_payload,
        "Registro API listening on {}",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
