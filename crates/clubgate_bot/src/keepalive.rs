//! Liveness and metrics HTTP endpoint.
//!
//! Hosting platforms ping `/` to keep the process awake; `/metrics` exposes
//! the verification counters.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use clubgate_core::VerificationMetrics;
use clubgate_error::{ServerError, ServerErrorKind};
use serde_json::json;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Shared state for the keepalive routes.
#[derive(Clone)]
pub struct KeepaliveState {
    metrics: VerificationMetrics,
}

impl KeepaliveState {
    /// Creates new state over a metrics collector.
    pub fn new(metrics: VerificationMetrics) -> Self {
        Self { metrics }
    }
}

/// Creates the keepalive router.
pub fn router(state: KeepaliveState) -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

/// Bind `addr`, returning the listener and the address actually bound.
///
/// # Errors
/// Returns a `Bind` error if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<(TcpListener, SocketAddr), ServerError> {
    let bind_error = |e: std::io::Error| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })
    };
    let listener = TcpListener::bind(addr).await.map_err(bind_error)?;
    let local = listener.local_addr().map_err(bind_error)?;
    Ok((listener, local))
}

/// Serve the keepalive routes on `listener` until the process exits.
///
/// # Errors
/// Returns a `Serve` error if the server stops unexpectedly.
#[instrument(skip(listener, state))]
pub async fn serve(listener: TcpListener, state: KeepaliveState) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Keepalive server listening");
    }
    axum::serve(listener, router(state))
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))
}

async fn alive() -> &'static str {
    "I'm alive!"
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn get_metrics(State(state): State<KeepaliveState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics.snapshot()))
}
