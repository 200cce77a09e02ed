//! Liveness endpoint for hosting platforms that expect an open port.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tracing::info;

/// Body returned by `GET /`.
pub const ALIVE_BODY: &str = "Bot is alive!";

async fn alive() -> &'static str {
    ALIVE_BODY
}

/// Router answering `GET /` with [`ALIVE_BODY`]; everything else is 404.
pub fn health_router() -> Router {
    Router::new().route("/", get(alive))
}

/// Serves [`health_router`] on `0.0.0.0:port` until the process exits.
pub async fn serve_health(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(port = port, "Liveness server listening");
    axum::serve(listener, health_router()).await?;
    Ok(())
}
