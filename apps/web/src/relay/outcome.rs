use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::relay::endpoint::RelayEndpoint;

/// Response header naming which path produced a relay response.
pub const RELAY_SOURCE_HEADER: &str = "x-relay-source";

/// Where a relay response body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaySource {
    Upstream,
    Mock,
}

impl RelaySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelaySource::Upstream => "upstream",
            RelaySource::Mock => "mock",
        }
    }
}

/// Result of one relay attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// Upstream answered 2xx with a JSON body. `body` holds the upstream bytes untouched.
    Forwarded { status: StatusCode, body: Bytes },
    /// Upstream answered non-2xx with a JSON body. Passed through, never masked.
    UpstreamError { status: StatusCode, body: Bytes },
    /// No upstream base URL; no outbound call was made.
    Unconfigured,
    /// Connect, DNS or timeout failure.
    Unreachable(String),
    /// Upstream body was not JSON.
    MalformedResponse(String),
}

impl RelayOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            RelayOutcome::Unconfigured
                | RelayOutcome::Unreachable(_)
                | RelayOutcome::MalformedResponse(_)
        )
    }

    pub fn source(&self) -> RelaySource {
        if self.is_fallback() {
            RelaySource::Mock
        } else {
            RelaySource::Upstream
        }
    }

    /// Renders the outcome as an HTTP response tagged with `x-relay-source`.
    ///
    /// Upstream replies keep their status and exact body bytes. Fallback paths answer 200
    /// with the endpoint's mock, except that with `fallback_on_failure == false` an
    /// unreachable or malformed upstream becomes a 502 tagged `upstream`. `Unconfigured`
    /// always answers with the mock.
    pub fn respond(self, endpoint: &RelayEndpoint, fallback_on_failure: bool) -> Response {
        let source = self.source();
        let response = match self {
            RelayOutcome::Forwarded { status, body }
            | RelayOutcome::UpstreamError { status, body } => (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            RelayOutcome::Unreachable(reason) if !fallback_on_failure => {
                return tagged(
                    AppError::UpstreamUnavailable(reason).into_response(),
                    RelaySource::Upstream,
                );
            }
            RelayOutcome::MalformedResponse(reason) if !fallback_on_failure => {
                return tagged(
                    AppError::UpstreamMalformed(reason).into_response(),
                    RelaySource::Upstream,
                );
            }
            RelayOutcome::Unconfigured
            | RelayOutcome::Unreachable(_)
            | RelayOutcome::MalformedResponse(_) => {
                (StatusCode::OK, Json((endpoint.mock)())).into_response()
            }
        };

        tagged(response, source)
    }
}

fn tagged(mut response: Response, source: RelaySource) -> Response {
    response.headers_mut().insert(
        RELAY_SOURCE_HEADER,
        HeaderValue::from_static(source.as_str()),
    );
    response
}
