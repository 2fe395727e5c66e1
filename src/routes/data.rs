//! Echo-style submission route.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    routing::post,
};
use time::OffsetDateTime;
use tracing::warn;

use crate::{
    dto::submission::{SubmissionEcho, SubmissionRequest},
    error::{AppError, ErrorBody, JsonBody},
    services::submission_service,
    state::SharedState,
};

/// Routes handling echo-style form submissions.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/data", post(submit_data))
}

/// Echo the submitted form back with defaults applied to empty fields.
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "data",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission echoed", body = SubmissionEcho),
        (status = 400, description = "Body is present but not a JSON object of optional strings", body = ErrorBody)
    )
)]
pub async fn submit_data(request: Request) -> Result<Json<SubmissionEcho>, AppError> {
    let submission = read_submission(request).await.inspect_err(|err| {
        warn!(error = %err, "rejected malformed submission");
    })?;
    Ok(Json(submission_service::submit(
        submission,
        OffsetDateTime::now_utc(),
    )))
}

/// Decode the submission body.
///
/// A request with neither a `Content-Type` nor a body carries no fields at all
/// and decodes to [`SubmissionRequest::default`]. Anything else must be JSON.
async fn read_submission(request: Request) -> Result<SubmissionRequest, AppError> {
    if request.headers().contains_key(CONTENT_TYPE) {
        let JsonBody(submission) = JsonBody::from_request(request, &()).await?;
        return Ok(submission);
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    if body.is_empty() {
        Ok(SubmissionRequest::default())
    } else {
        Err(AppError::BadRequest(
            "expected request with `Content-Type: application/json`".into(),
        ))
    }
}
