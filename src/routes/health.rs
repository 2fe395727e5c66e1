//! Health check route.

use axum::{Json, Router, routing::get};
use time::OffsetDateTime;

use crate::{dto::health::HealthStatus, services::health_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Service is running", body = HealthStatus))
)]
/// Return the health status of the backend stamped with the current time.
pub async fn healthcheck() -> Json<HealthStatus> {
    Json(health_service::health_status(OffsetDateTime::now_utc()))
}

/// Configure the health routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/api/health", get(healthcheck))
}
