//! Library crate for groklord-fullstack, exposing the API server and its client presenter.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

use config::AppConfig;
use state::AppState;

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn build_router(config: AppConfig) -> Router<()> {
    routes::router(AppState::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
