//! Reqwest-backed transport adapter.

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use modsweep_core::{Transport, TransportResponse};

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// HTTP transport talking to the moderation authority.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport with the given base URL and request timeout.
    ///
    /// Every request carries a per-process `x-request-id` default header so
    /// server logs can be correlated with one client session. Timeout policy
    /// lives here; the dispatcher above never enforces one.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> anyhow::Result<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(&Uuid::new_v4().to_string())
            .map_err(|err| anyhow!("failed to build request id header: {err}"))?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|err| anyhow!("failed to build HTTP client: {err}"))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, payload: &Value) -> anyhow::Result<TransportResponse> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| anyhow!("invalid base URL: {err}"))?;

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|err| anyhow!("request to {path} failed: {err}"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| anyhow!("failed to read response body from {path}: {err}"))?;

        Ok(TransportResponse { status, body })
    }
}
