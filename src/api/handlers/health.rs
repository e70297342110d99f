//! Health check handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse, ReadyResponse};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Readiness probe. The codec has no external dependencies, so a running
/// worker is ready.
pub async fn ready() -> Json<ApiResponse<ReadyResponse>> {
    Json(ApiResponse::success(ReadyResponse { ready: true }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> String {
    let mut output = String::new();

    output.push_str("# HELP shortuuid_up Whether the service is up\n");
    output.push_str("# TYPE shortuuid_up gauge\n");
    output.push_str("shortuuid_up 1\n");

    if let Some(handle) = &state.metrics {
        output.push_str(&handle.render());
    }

    output
}
