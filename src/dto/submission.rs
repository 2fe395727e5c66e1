//! Submission request and echo payloads.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use super::format_timestamp;

/// Name echoed back when the submission omits one.
pub const DEFAULT_NAME: &str = "Anonymous";
/// Message echoed back when the submission omits one.
pub const DEFAULT_MESSAGE: &str = "No message provided";

/// Body accepted by `POST /api/data`. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRequest {
    /// Submitter name; missing, null or empty falls back to [`DEFAULT_NAME`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form message; missing, null or empty falls back to [`DEFAULT_MESSAGE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionRequest {
    /// Convenience constructor used by clients posting a filled-in form.
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            message: Some(message.into()),
        }
    }
}

/// Normalised copy of a submission, as echoed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReceivedSubmission {
    /// Submitted name or [`DEFAULT_NAME`].
    pub name: String,
    /// Submitted message or [`DEFAULT_MESSAGE`].
    pub message: String,
    /// ISO-8601 time at which the submission was handled.
    pub timestamp: String,
}

/// Response returned by `POST /api/data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionEcho {
    /// Always `true` for accepted submissions.
    pub success: bool,
    /// The normalised submission.
    pub received: ReceivedSubmission,
}

impl SubmissionEcho {
    /// Normalise `request`, substituting defaults for empty fields, stamped with `at`.
    pub fn from_request(request: SubmissionRequest, at: OffsetDateTime) -> Self {
        Self {
            success: true,
            received: ReceivedSubmission {
                name: or_default(request.name, DEFAULT_NAME),
                message: or_default(request.message, DEFAULT_MESSAGE),
                timestamp: format_timestamp(at),
            },
        }
    }
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const AT: OffsetDateTime = datetime!(2024-05-01 12:00:00 UTC);

    #[test]
    fn present_fields_are_echoed_verbatim() {
        let echo = SubmissionEcho::from_request(SubmissionRequest::new("Test User", "Test message"), AT);
        assert!(echo.success);
        assert_eq!(echo.received.name, "Test User");
        assert_eq!(echo.received.message, "Test message");
        assert_eq!(echo.received.timestamp, "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let echo = SubmissionEcho::from_request(SubmissionRequest::default(), AT);
        assert_eq!(echo.received.name, DEFAULT_NAME);
        assert_eq!(echo.received.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn empty_strings_fall_back_to_defaults() {
        let echo = SubmissionEcho::from_request(SubmissionRequest::new("", ""), AT);
        assert_eq!(echo.received.name, "Anonymous");
        assert_eq!(echo.received.message, "No message provided");
    }

    #[test]
    fn whitespace_is_not_treated_as_empty() {
        let echo = SubmissionEcho::from_request(SubmissionRequest::new(" ", "\n"), AT);
        assert_eq!(echo.received.name, " ");
        assert_eq!(echo.received.message, "\n");
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let request: SubmissionRequest =
            serde_json::from_str(r#"{"name":null,"message":"hi"}"#).unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.message.as_deref(), Some("hi"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let request: SubmissionRequest =
            serde_json::from_str(r#"{"name":"a","extra":42}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("a"));
    }

    #[test]
    fn non_string_fields_are_rejected() {
        let result = serde_json::from_str::<SubmissionRequest>(r#"{"name":123}"#);
        assert!(result.is_err());
    }
}
