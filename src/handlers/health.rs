use axum::response::Json;
use tracing::instrument;
use crate::schemas::HealthResponse;

/// Health check endpoint.
/// A pure liveness probe: no store connectivity check is performed.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
