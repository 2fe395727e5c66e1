//! Error types shared by the HTTP client implementation.

use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`ClientError`] failures.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures that can occur while talking to the backend API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build HTTP client")]
    ClientBuilder {
        /// Underlying builder failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent or no response arrived.
    #[error("failed to send request to `{path}`")]
    RequestSend {
        /// API path the request targeted.
        path: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status code.
    #[error("unexpected response status {status} for `{path}`")]
    RequestStatus {
        /// API path the request targeted.
        path: String,
        /// Status code the backend answered with.
        status: StatusCode,
    },
    /// Response payload could not be decoded into the expected shape.
    #[error("failed to decode response for `{path}`")]
    DecodeResponse {
        /// API path the request targeted.
        path: String,
        /// Decoding failure.
        #[source]
        source: reqwest::Error,
    },
}

/// Flatten an error and its sources into a single `outer: inner: root` line.
pub fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
