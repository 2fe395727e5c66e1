//! Router behaviour driven in-process through `oneshot`.

use axum::{
    Router,
    http::{self, Request, StatusCode},
};
use groklord_fullstack::{
    build_router,
    config::AppConfig,
    dto::{health::HealthStatus, message::Greeting, submission::SubmissionEcho},
    error::ErrorBody,
};
use http_body_util::BodyExt;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppConfig::new(0, "test"))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn parse_timestamp(raw: &str) -> OffsetDateTime {
    OffsetDateTime::parse(raw, &Rfc3339).unwrap()
}

// --- health ---

#[tokio::test]
async fn health_returns_ok_with_current_timestamp() {
    // Millisecond precision on the wire, so compare against a truncated start.
    let before = OffsetDateTime::now_utc().replace_nanosecond(0).unwrap();
    let resp = app().oneshot(get("/api/health")).await.unwrap();
    let after = OffsetDateTime::now_utc();

    assert_eq!(resp.status(), StatusCode::OK);
    let health: HealthStatus = body_json(resp).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.message, "Backend API is running");
    let at = parse_timestamp(&health.timestamp);
    assert!(at >= before && at <= after, "{at} not within [{before}, {after}]");
}

#[tokio::test]
async fn health_is_stable_apart_from_timestamp() {
    let first: HealthStatus = body_json(app().oneshot(get("/api/health")).await.unwrap()).await;
    let second: HealthStatus = body_json(app().oneshot(get("/api/health")).await.unwrap()).await;
    assert_eq!(first.status, second.status);
    assert_eq!(first.message, second.message);
}

// --- message ---

#[tokio::test]
async fn message_returns_greeting_and_environment() {
    let resp = app().oneshot(get("/api/message")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let greeting: Greeting = body_json(resp).await;
    assert_eq!(greeting.message, "Hello from the backend API!");
    assert_eq!(greeting.environment, "test");
}

#[tokio::test]
async fn message_defaults_to_development() {
    let resp = build_router(AppConfig::default())
        .oneshot(get("/api/message"))
        .await
        .unwrap();
    let greeting: Greeting = body_json(resp).await;
    assert_eq!(greeting.environment, "development");
}

#[tokio::test]
async fn message_is_identical_across_calls() {
    let first: Greeting = body_json(app().oneshot(get("/api/message")).await.unwrap()).await;
    let second: Greeting = body_json(app().oneshot(get("/api/message")).await.unwrap()).await;
    assert_eq!(first, second);
}

// --- data ---

#[tokio::test]
async fn submit_echoes_provided_fields() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"name":"Test User","message":"Test message"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: SubmissionEcho = body_json(resp).await;
    assert!(echo.success);
    assert_eq!(echo.received.name, "Test User");
    assert_eq!(echo.received.message, "Test message");
    parse_timestamp(&echo.received.timestamp);
}

#[tokio::test]
async fn submit_empty_object_uses_defaults() {
    let resp = app()
        .oneshot(json_request("POST", "/api/data", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: SubmissionEcho = body_json(resp).await;
    assert!(echo.success);
    assert_eq!(echo.received.name, "Anonymous");
    assert_eq!(echo.received.message, "No message provided");
}

#[tokio::test]
async fn submit_empty_and_null_fields_use_defaults() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/data",
            r#"{"name":"","message":null}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: SubmissionEcho = body_json(resp).await;
    assert_eq!(echo.received.name, "Anonymous");
    assert_eq!(echo.received.message, "No message provided");
}

#[tokio::test]
async fn submit_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/data", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = body_json(resp).await;
    assert!(body.message.starts_with("bad request"));
}

#[tokio::test]
async fn submit_non_object_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/data", r#"["a","b"]"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_non_string_field_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/data", r#"{"name":42}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_without_content_type_returns_400() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .body(r#"{"name":"x"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_without_body_uses_defaults() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/data")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: SubmissionEcho = body_json(resp).await;
    assert!(echo.success);
    assert_eq!(echo.received.name, "Anonymous");
    assert_eq!(echo.received.message, "No message provided");
}

#[tokio::test]
async fn submit_json_content_type_with_empty_body_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/data", ""))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- routing ---

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let resp = app().oneshot(get("/api/nothing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = body_json(resp).await;
    assert_eq!(body.message, "not found: /api/nothing");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let resp = app().oneshot(get("/api-doc/openapi.json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"]["/api/data"]["post"].is_object());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(http::header::ORIGIN, "http://localhost:3000")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .contains_key(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
