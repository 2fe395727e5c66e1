//! Default substitution for submissions.

use time::OffsetDateTime;
use tracing::info;

use crate::dto::submission::{SubmissionEcho, SubmissionRequest};

/// Echo a submission back, substituting defaults for missing or empty fields.
pub fn submit(request: SubmissionRequest, now: OffsetDateTime) -> SubmissionEcho {
    let defaulted_name = request.name.as_deref().is_none_or(str::is_empty);
    let defaulted_message = request.message.as_deref().is_none_or(str::is_empty);

    let echo = SubmissionEcho::from_request(request, now);
    info!(
        defaulted_name,
        defaulted_message,
        name_len = echo.received.name.len(),
        message_len = echo.received.message.len(),
        "submission received"
    );
    echo
}
