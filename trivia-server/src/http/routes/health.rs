//! Liveness plus a store round-trip

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Categories visible through the store; `None` when the store is unreachable
    pub categories: Option<usize>,
}

/// GET /health - 200 when the store answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, categories) = match state.store.list().await {
        Ok(categories) => (StatusCode::OK, "ok", Some(categories.len())),
        Err(err) => {
            tracing::warn!(error = %err, "health check: store unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            categories,
        }),
    )
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
