//! Seam between the presenter and the transport.

use futures::future::BoxFuture;

use crate::dto::{
    health::HealthStatus,
    message::Greeting,
    submission::{SubmissionEcho, SubmissionRequest},
};

use super::error::ClientResult;

/// Remote operations the presenter relies on.
///
/// Futures are `'static` so each call can run on its own spawned task.
pub trait Backend: Send + Sync {
    /// `GET /api/health`.
    fn health(&self) -> BoxFuture<'static, ClientResult<HealthStatus>>;
    /// `GET /api/message`.
    fn message(&self) -> BoxFuture<'static, ClientResult<Greeting>>;
    /// `POST /api/data` with `request` as the body.
    fn submit(&self, request: SubmissionRequest) -> BoxFuture<'static, ClientResult<SubmissionEcho>>;
}
