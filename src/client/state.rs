//! Immutable presenter state and the pure transitions applied to it.
//!
//! Every change to what the view shows goes through [`PresenterState::reduce`]
//! with a named [`PresenterEvent`]. Nothing here performs I/O, so transitions
//! can be exercised without a backend or a renderer.

use std::fmt;

use crate::dto::{
    health::HealthStatus,
    message::Greeting,
    submission::{SubmissionEcho, SubmissionRequest},
};

/// Form field a user can fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The `Name:` input.
    Name,
    /// The `Message:` textarea.
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Name => f.write_str("name"),
            FormField::Message => f.write_str("message"),
        }
    }
}

/// Current contents of the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    /// Name typed by the user.
    pub name: String,
    /// Message typed by the user.
    pub message: String,
}

impl FormData {
    /// Fields that are required but still empty, in display order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(FormField::Name);
        }
        if self.message.is_empty() {
            missing.push(FormField::Message);
        }
        missing
    }

    /// Request body posted for this form.
    pub fn to_request(&self) -> SubmissionRequest {
        SubmissionRequest::new(self.name.clone(), self.message.clone())
    }
}

/// Outcome of the latest submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The backend echoed the submission.
    Succeeded(SubmissionEcho),
    /// The request failed before an echo could be read.
    Failed {
        /// Failure message shown inline.
        error: String,
    },
}

/// Events that can be applied to the presenter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// The load-time health read completed.
    HealthLoaded(HealthStatus),
    /// The load-time greeting read completed.
    MessageLoaded(Greeting),
    /// The user changed the name field.
    NameEdited(String),
    /// The user changed the message field.
    MessageEdited(String),
    /// A submission request was issued.
    SubmitStarted,
    /// The submission request returned an echo.
    SubmitSucceeded(SubmissionEcho),
    /// The submission request failed.
    SubmitFailed(String),
}

impl PresenterEvent {
    /// Stable kebab-case name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            PresenterEvent::HealthLoaded(_) => "health-loaded",
            PresenterEvent::MessageLoaded(_) => "message-loaded",
            PresenterEvent::NameEdited(_) => "name-edited",
            PresenterEvent::MessageEdited(_) => "message-edited",
            PresenterEvent::SubmitStarted => "submit-started",
            PresenterEvent::SubmitSucceeded(_) => "submit-succeeded",
            PresenterEvent::SubmitFailed(_) => "submit-failed",
        }
    }
}

/// Snapshot of everything the view renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenterState {
    health: Option<HealthStatus>,
    message: Option<Greeting>,
    form: FormData,
    submit_result: Option<SubmitResult>,
    loading: bool,
}

impl PresenterState {
    /// Create the initial state: nothing loaded, empty form, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Health status, once the load-time read has completed.
    pub fn health(&self) -> Option<&HealthStatus> {
        self.health.as_ref()
    }

    /// Backend greeting, once the load-time read has completed.
    pub fn message(&self) -> Option<&Greeting> {
        self.message.as_ref()
    }

    /// Current form contents.
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Result of the latest submission, cleared while one is in flight.
    pub fn submit_result(&self) -> Option<&SubmitResult> {
        self.submit_result.as_ref()
    }

    /// Whether a submission is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Both load-time reads have been applied.
    pub fn is_loaded(&self) -> bool {
        self.health.is_some() && self.message.is_some()
    }

    /// Apply `event`, returning the next state.
    pub fn reduce(self, event: PresenterEvent) -> Self {
        match event {
            PresenterEvent::HealthLoaded(health) => Self {
                health: Some(health),
                ..self
            },
            PresenterEvent::MessageLoaded(message) => Self {
                message: Some(message),
                ..self
            },
            PresenterEvent::NameEdited(name) => Self {
                form: FormData { name, ..self.form },
                ..self
            },
            PresenterEvent::MessageEdited(message) => Self {
                form: FormData {
                    message,
                    ..self.form
                },
                ..self
            },
            PresenterEvent::SubmitStarted => Self {
                submit_result: None,
                loading: true,
                ..self
            },
            PresenterEvent::SubmitSucceeded(echo) => Self {
                submit_result: Some(SubmitResult::Succeeded(echo)),
                form: FormData::default(),
                loading: false,
                ..self
            },
            PresenterEvent::SubmitFailed(error) => Self {
                submit_result: Some(SubmitResult::Failed { error }),
                loading: false,
                ..self
            },
        }
    }
}
