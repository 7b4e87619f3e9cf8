use crate::error::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Liveness check
///
/// Reports that the process is serving requests. HubSpot is not contacted.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
