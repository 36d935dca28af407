//! Relay: forwards a JSON request to the tailoring/ATS upstream and degrades to a
//! fixed mock payload when the upstream is unconfigured or unavailable.
//!
//! Both `/api/tailor` and `/api/ats` go through the single `Relay::forward`; the
//! `RelayEndpoint` carries the per-operation sub-path and mock.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::IgnoredAny;
use tracing::{debug, info, warn};

pub mod endpoint;
pub mod handlers;
pub mod mock;
pub mod outcome;
pub mod transport;

use crate::relay::endpoint::RelayEndpoint;
use crate::relay::outcome::RelayOutcome;
use crate::relay::transport::{HttpTransport, TransportError, UpstreamTransport};

/// Stateless relay shared by all handlers. Cheap to clone.
#[derive(Clone)]
pub struct Relay {
    base_url: Option<String>,
    transport: Arc<dyn UpstreamTransport>,
}

impl Relay {
    pub fn new(base_url: Option<String>, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Relay backed by the real HTTP transport.
    pub fn http(base_url: Option<String>) -> Result<Self, TransportError> {
        Ok(Self::new(base_url, Arc::new(HttpTransport::new()?)))
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Forwards `body` verbatim to the endpoint's upstream URL.
    /// Makes at most one outbound call and never fails; every path is a `RelayOutcome`.
    pub async fn forward(&self, endpoint: &RelayEndpoint, body: Bytes) -> RelayOutcome {
        let Some(base) = self.base_url.as_deref() else {
            info!(endpoint = endpoint.name, "No upstream configured, serving mock");
            return RelayOutcome::Unconfigured;
        };

        let url = endpoint.upstream_url(base);
        debug!(endpoint = endpoint.name, %url, "Forwarding request upstream");

        let reply = match self.transport.post_json(&url, body).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(endpoint = endpoint.name, %url, "Upstream unreachable: {e}");
                return RelayOutcome::Unreachable(e.to_string());
            }
        };

        // Validate only; the upstream bytes are what the caller gets back.
        match serde_json::from_slice::<IgnoredAny>(&reply.body) {
            Ok(_) if reply.status.is_success() => RelayOutcome::Forwarded {
                status: reply.status,
                body: reply.body,
            },
            Ok(_) => {
                debug!(
                    endpoint = endpoint.name,
                    status = reply.status.as_u16(),
                    "Passing upstream error through"
                );
                RelayOutcome::UpstreamError {
                    status: reply.status,
                    body: reply.body,
                }
            }
            Err(e) => {
                warn!(
                    endpoint = endpoint.name,
                    status = reply.status.as_u16(),
                    "Upstream returned non-JSON body: {e}"
                );
                RelayOutcome::MalformedResponse(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::endpoint::{ATS_CHECK, TAILOR};
    use crate::relay::transport::UpstreamReply;
    use crate::test_support::{closed_port_url, spawn_server};
    use async_trait::async_trait;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Scripted transport that records every call it receives.
    struct ScriptedTransport {
        status: StatusCode,
        body: &'static str,
        calls: Mutex<Vec<(String, Bytes)>>,
    }

    impl ScriptedTransport {
        fn new(status: StatusCode, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                status,
                body,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Bytes)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UpstreamTransport for ScriptedTransport {
        async fn post_json(&self, url: &str, body: Bytes) -> Result<UpstreamReply, TransportError> {
            self.calls.lock().unwrap().push((url.to_string(), body));
            Ok(UpstreamReply {
                status: self.status,
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[tokio::test]
    async fn test_unconfigured_makes_no_call() {
        let transport = ScriptedTransport::new(StatusCode::OK, "{}");
        let relay = Relay::new(None, transport.clone());

        for body in [&b"{\"jobText\":\"x\"}"[..], &b"not json at all"[..], &b""[..]] {
            let outcome = relay.forward(&TAILOR, Bytes::copy_from_slice(body)).await;
            assert_eq!(outcome, RelayOutcome::Unconfigured);
        }
        assert!(transport.calls().is_empty());
        assert!(!relay.is_configured());
    }

    #[tokio::test]
    async fn test_forwards_body_verbatim_to_subpath() {
        let transport = ScriptedTransport::new(StatusCode::OK, r#"{"atsScore": 91}"#);
        let relay = Relay::new(Some("http://upstream:8000".to_string()), transport.clone());

        let body = Bytes::from_static(br#"{"resumeText":"Jane","jobText":"Rust"}"#);
        let outcome = relay.forward(&ATS_CHECK, body.clone()).await;

        assert_eq!(
            outcome,
            RelayOutcome::Forwarded {
                status: StatusCode::OK,
                body: Bytes::from_static(br#"{"atsScore": 91}"#),
            }
        );
        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "http://upstream:8000/api/v1/ats/check");
        assert_eq!(calls[0].1, body);
    }

    #[tokio::test]
    async fn test_non_2xx_json_is_upstream_error() {
        let transport =
            ScriptedTransport::new(StatusCode::SERVICE_UNAVAILABLE, r#"{"detail":"busy"}"#);
        let relay = Relay::new(Some("http://upstream".to_string()), transport);

        let outcome = relay.forward(&TAILOR, Bytes::from_static(b"{}")).await;
        assert_eq!(
            outcome,
            RelayOutcome::UpstreamError {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: Bytes::from_static(br#"{"detail":"busy"}"#),
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let transport = ScriptedTransport::new(StatusCode::OK, "<html>502 Bad Gateway</html>");
        let relay = Relay::new(Some("http://upstream".to_string()), transport);

        let outcome = relay.forward(&TAILOR, Bytes::from_static(b"{}")).await;
        assert!(matches!(outcome, RelayOutcome::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_real_upstream_status_and_body_returned() {
        let upstream = Router::new().route(
            "/api/v1/tailor",
            post(|Json(payload): Json<Value>| async move {
                (
                    StatusCode::ACCEPTED,
                    Json(json!({ "echo": payload, "generationId": "up-1" })),
                )
            }),
        );
        let base = spawn_server(upstream).await;
        let relay = Relay::http(Some(base)).unwrap();

        let outcome = relay
            .forward(&TAILOR, Bytes::from_static(br#"{"jobText":"Rust"}"#))
            .await;
        let (status, body) = match outcome {
            RelayOutcome::Forwarded { status, body } => (status, body),
            other => panic!("expected Forwarded, got {other:?}"),
        };
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "echo": { "jobText": "Rust" }, "generationId": "up-1" })
        );
    }

    #[tokio::test]
    async fn test_upstream_bytes_kept_exactly() {
        let raw = "{\"zeta\":1,\"alpha\":{\"y\":2,\"b\":3},  \"n\": 1.50}";
        let transport = ScriptedTransport::new(StatusCode::OK, raw);
        let relay = Relay::new(Some("http://upstream".to_string()), transport);

        let outcome = relay.forward(&TAILOR, Bytes::from_static(b"{}")).await;
        assert_eq!(
            outcome,
            RelayOutcome::Forwarded {
                status: StatusCode::OK,
                body: Bytes::from_static(raw.as_bytes()),
            }
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_unreachable() {
        let relay = Relay::http(Some(closed_port_url())).unwrap();

        let outcome = relay.forward(&ATS_CHECK, Bytes::from_static(b"{}")).await;
        assert!(matches!(outcome, RelayOutcome::Unreachable(_)));
    }
}
