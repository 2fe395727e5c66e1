//! Health status reporting.

use time::OffsetDateTime;
use tracing::debug;

use crate::dto::health::HealthStatus;

/// Respond with the static health payload stamped with the current time.
pub fn health_status(now: OffsetDateTime) -> HealthStatus {
    let status = HealthStatus::ok(now);
    debug!(timestamp = %status.timestamp, "health check served");
    status
}
