//! Health check payload.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use super::format_timestamp;

/// Status reported by a healthy backend.
pub const HEALTH_STATUS_OK: &str = "ok";
/// Human-readable line accompanying the health status.
pub const HEALTH_MESSAGE: &str = "Backend API is running";

/// Health payload returned by the `/api/health` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Health status, always `"ok"` while the process answers.
    pub status: String,
    /// Fixed description of the running service.
    pub message: String,
    /// ISO-8601 time at which the request was handled.
    pub timestamp: String,
}

impl HealthStatus {
    /// Create a health response stamped with `at`.
    pub fn ok(at: OffsetDateTime) -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
            timestamp: format_timestamp(at),
        }
    }
}
