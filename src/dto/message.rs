//! Greeting payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting text returned by `/api/message`.
pub const GREETING_MESSAGE: &str = "Hello from the backend API!";

/// Static greeting together with the environment the server runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    /// Fixed greeting text.
    pub message: String,
    /// Deployment environment name taken from configuration.
    pub environment: String,
}

impl Greeting {
    /// Build the greeting for the given environment.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
            environment: environment.into(),
        }
    }
}
