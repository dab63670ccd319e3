use crate::types::{HealthResponse, ServiceInfo};
use axum::Json;
use truthpulse_core::APP_NAME;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "TruthPulse backend running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Service banner served at `/` when the front-end is not embedded
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "health"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        app: APP_NAME.to_string(),
        status: "ok".to_string(),
        docs: "/api-docs/openapi.json".to_string(),
        health: "/api/health".to_string(),
    })
}
