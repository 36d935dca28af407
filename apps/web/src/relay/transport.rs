//! Outbound HTTP seam. The relay only talks to the upstream through `UpstreamTransport`,
//! so tests can swap in a scripted transport without a network.

use async_trait::async_trait;
use axum::http::StatusCode;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream sent an invalid status code: {0}")]
    InvalidStatus(u16),
}

/// Raw upstream reply. The body is not yet known to be JSON.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// POSTs `body` to `url` as `application/json`. One attempt, no retries.
    async fn post_json(&self, url: &str, body: Bytes) -> Result<UpstreamReply, TransportError>;
}

/// `reqwest`-backed transport used in production.
/// No client timeout is set: slow upstream generations are waited out, not mocked.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl UpstreamTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: Bytes) -> Result<UpstreamReply, TransportError> {
        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;

        // reqwest and axum sit on different `http` major versions; bridge via the raw code.
        let raw_status = response.status().as_u16();
        let status =
            StatusCode::from_u16(raw_status).map_err(|_| TransportError::InvalidStatus(raw_status))?;
        let body = response.bytes().await?;

        Ok(UpstreamReply { status, body })
    }
}
