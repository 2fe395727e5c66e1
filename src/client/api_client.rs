//! `reqwest`-backed [`Backend`] implementation.

use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::dto::{
    health::HealthStatus,
    message::Greeting,
    submission::{SubmissionEcho, SubmissionRequest},
};

use super::{
    backend::Backend,
    error::{ClientError, ClientResult},
};

const HEALTH_PATH: &str = "/api/health";
const MESSAGE_PATH: &str = "/api/message";
const DATA_PATH: &str = "/api/data";

/// HTTP implementation of [`Backend`] talking to a running API server.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Build a client rooted at `base_url` (a trailing slash is ignored).
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| ClientError::ClientBuilder { source })?;

        Ok(Self {
            client,
            base_url: Arc::<str>::from(base_url.trim_end_matches('/')),
        })
    }

    /// Base address every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Fetch the backend health status.
    pub async fn fetch_health(&self) -> ClientResult<HealthStatus> {
        let response = self.send(self.request(Method::GET, HEALTH_PATH), HEALTH_PATH).await?;
        decode(response, HEALTH_PATH).await
    }

    /// Fetch the backend greeting.
    pub async fn fetch_message(&self) -> ClientResult<Greeting> {
        let response = self.send(self.request(Method::GET, MESSAGE_PATH), MESSAGE_PATH).await?;
        decode(response, MESSAGE_PATH).await
    }

    /// Post a submission and return the echoed payload.
    pub async fn post_submission(&self, request: &SubmissionRequest) -> ClientResult<SubmissionEcho> {
        let builder = self.request(Method::POST, DATA_PATH).json(request);
        let response = self.send(builder, DATA_PATH).await?;
        decode(response, DATA_PATH).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder, path: &str) -> ClientResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|source| ClientError::RequestSend {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(path, %status, "received API response");
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::RequestStatus {
                path: path.to_string(),
                status,
            })
        }
    }
}

async fn decode<T>(response: Response, path: &str) -> ClientResult<T>
where
    T: DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::DecodeResponse {
            path: path.to_string(),
            source,
        })
}

impl Backend for ApiClient {
    fn health(&self) -> BoxFuture<'static, ClientResult<HealthStatus>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_health().await })
    }

    fn message(&self) -> BoxFuture<'static, ClientResult<Greeting>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_message().await })
    }

    fn submit(&self, request: SubmissionRequest) -> BoxFuture<'static, ClientResult<SubmissionEcho>> {
        let client = self.clone();
        Box::pin(async move { client.post_submission(&request).await })
    }
}
