//! Shared, read-only application state handed to every request handler.

use std::sync::Arc;

use crate::config::AppConfig;

/// Cheaply clonable handle to the [`AppState`].
pub type SharedState = Arc<AppState>;

/// Central application state. Holds nothing mutable, so handlers never lock.
#[derive(Debug)]
pub struct AppState {
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self { config })
    }

    /// Configuration the server was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
