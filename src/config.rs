//! Server configuration resolved once at start-up from the process environment.

use std::env;

use tracing::{info, warn};

/// Port used when neither [`PORT_ENV`] nor [`PORT_FALLBACK_ENV`] holds a valid value.
pub const DEFAULT_PORT: u16 = 5000;
/// Environment name reported by `/api/message` when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Primary variable holding the listen port.
const PORT_ENV: &str = "PORT";
/// Secondary variable consulted when [`PORT_ENV`] is unset.
const PORT_FALLBACK_ENV: &str = "SERVER_PORT";
/// Primary variable holding the deployment environment name.
const ENVIRONMENT_ENV: &str = "APP_ENV";
/// Secondary variable kept for deployments that still export `NODE_ENV`.
const ENVIRONMENT_FALLBACK_ENV: &str = "NODE_ENV";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    port: u16,
    environment: String,
}

impl AppConfig {
    /// Build a configuration from explicit values.
    pub fn new(port: u16, environment: impl Into<String>) -> Self {
        Self {
            port,
            environment: environment.into(),
        }
    }

    /// Load the configuration from the process environment, falling back to defaults.
    pub fn load() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        info!(
            port = config.port,
            environment = %config.environment,
            "loaded server configuration"
        );
        config
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset so that `APP_ENV=` behaves like a
    /// missing variable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match read(PORT_ENV).or_else(|| read(PORT_FALLBACK_ENV)) {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(err) => {
                    warn!(
                        value = %raw,
                        error = %err,
                        "invalid listen port; falling back to default"
                    );
                    DEFAULT_PORT
                }
            },
            None => DEFAULT_PORT,
        };

        let environment = read(ENVIRONMENT_ENV)
            .or_else(|| read(ENVIRONMENT_FALLBACK_ENV))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Self { port, environment }
    }

    /// Port the HTTP listener binds to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Deployment environment name exposed by the greeting endpoint.
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, DEFAULT_ENVIRONMENT)
    }
}
