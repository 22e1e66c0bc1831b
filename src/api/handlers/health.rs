//! Liveness probe handler.

use axum::Json;

use crate::api::dto::HealthResponse;

/// Reports service liveness.
///
/// # Endpoint
///
/// `GET /health` (public)
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
