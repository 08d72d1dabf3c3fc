//! Browser HTTP adapter backed by `gloo-net`

use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::join_url;
use crate::ports::outbound::{ApiError, RawApiPort};
use crate::runner::config::ClientConfig;

/// `fetch`-based adapter. The browser owns timeouts, so
/// `ClientConfig::request_timeout_ms` is not applied here.
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
}

impl ApiAdapter {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::http(status, body))
}

fn request_failed(e: gloo_net::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        tracing::debug!(path, "GET");
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        let response = ensure_success(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        tracing::debug!(path, "POST");
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        tracing::debug!(path, "PUT");
        let response = Request::put(&self.url(path))
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?
            .send()
            .await
            .map_err(request_failed)?;
        ensure_success(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let response = Request::delete(&self.url(path))
            .send()
            .await
            .map_err(request_failed)?;
        ensure_success(response).await.map(|_| ())
    }
}
