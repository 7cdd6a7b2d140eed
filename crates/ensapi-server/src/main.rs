//! # ensapi: ENSApi Server
//!
//! Reads configuration from the environment, builds the route registry and
//! its OpenAPI document, and serves the API until the process is stopped.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::net::SocketAddr;

use anyhow::Context;
use ensapi_routes::RouteRegistry;
use ensapi_server::config::AppConfig;
use ensapi_server::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let port = config.port;
    tracing::info!(namespace = %config.namespace, version = %config.version, "starting ENSApi");

    let state = AppState::new(config, RouteRegistry::new())
        .context("failed to generate the OpenAPI document")?;
    let app = ensapi_server::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let port = listener.local_addr()?.port();
    tracing::info!("ENSApi listening on http://localhost:{port}");
    tracing::info!("OpenAPI document at http://localhost:{port}/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
