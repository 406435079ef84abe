//! Bind, log the bound port, and serve until shutdown.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {0}")]
    Address(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Resolve `host` (an IP literal such as `::` or a name such as `localhost`)
/// to the first address it maps to.
pub async fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| ServerError::Address(format!("{}:{}: {}", host, port, e)))?;

    addrs
        .next()
        .ok_or_else(|| ServerError::Address(format!("{}:{}: no addresses found", host, port)))
}

/// Start serving `app` on `host:port`.
///
/// `name` identifies the server in logs. Blocks until the server shuts down.
pub async fn start_server(
    app: Router,
    name: &'static str,
    host: &str,
    port: u16,
) -> Result<(), ServerError> {
    let addr = resolve_addr(host, port).await?;

    let handle = Handle::new();

    let listening = handle.clone();
    tokio::spawn(async move {
        if let Some(bound) = listening.listening().await {
            tracing::info!(server = name, %bound, "Server running on port {}", bound.port());
        }
    });

    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!(server = name, "Server stopped");
    Ok(())
}
