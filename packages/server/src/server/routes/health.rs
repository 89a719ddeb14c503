use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check endpoint
///
/// The service holds no local state to probe; the hosted backend is checked
/// lazily per request, so this only reports that the process is serving.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "frontdesk-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
