//! OpenAPI document aggregation.

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the GROKLORD backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::message::message,
        crate::routes::data::submit_data,
    ),
    components(
        schemas(
            crate::dto::health::HealthStatus,
            crate::dto::message::Greeting,
            crate::dto::submission::SubmissionRequest,
            crate::dto::submission::SubmissionEcho,
            crate::dto::submission::ReceivedSubmission,
            crate::error::ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "message", description = "Static backend greeting"),
        (name = "data", description = "Echo-style form submission"),
    )
)]
pub struct ApiDoc;
