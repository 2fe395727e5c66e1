//! HTTP routes, one submodule per endpoint group.

use axum::{Router, http::Uri};

use crate::{error::AppError, state::SharedState};

pub mod data;
pub mod docs;
pub mod health;
pub mod message;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(message::router())
        .merge(data::router());

    let docs_router = docs::router(state.clone());

    api_router
        .merge(docs_router)
        .fallback(not_found)
        .with_state(state)
}

/// Answer unknown paths with a JSON 404 instead of an empty body.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
