//! Request-independent logic behind each route.

/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Greeting service.
pub mod message_service;
/// Echo-style submission service.
pub mod submission_service;
