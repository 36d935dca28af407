//! Axum route handlers for the relayed API routes.
//!
//! Bodies are taken as raw bytes: no content-type or schema check happens before forwarding.
//! At debug level the body is peeked at for logging only; a mismatch never blocks the relay.

use axum::{extract::State, response::Response};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, enabled, Level};

use crate::models::ats::AtsRequest;
use crate::models::tailor::TailorRequest;
use crate::relay::endpoint::{RelayEndpoint, ATS_CHECK, TAILOR};
use crate::state::AppState;

/// POST /api/tailor
pub async fn handle_tailor(State(state): State<AppState>, body: Bytes) -> Response {
    if enabled!(Level::DEBUG) {
        match peek::<TailorRequest>(&body) {
            Some(req) => debug!(
                tone = ?req.tone,
                role = ?req.role,
                has_resume_id = req.resume_id.is_some(),
                master_text_len = req.master_text.as_ref().map_or(0, |t| t.len()),
                job_text_len = req.job_text.len(),
                "Tailor request"
            ),
            None => debug!("Tailor request body is not a TailorRequest; relaying as-is"),
        }
    }
    relay_to(&state, &TAILOR, body).await
}

/// POST /api/ats
pub async fn handle_ats(State(state): State<AppState>, body: Bytes) -> Response {
    if enabled!(Level::DEBUG) {
        match peek::<AtsRequest>(&body) {
            Some(req) => debug!(
                resume_text_len = req.resume_text.len(),
                has_job_text = req.job_text.is_some(),
                "ATS request"
            ),
            None => debug!("ATS request body is not an AtsRequest; relaying as-is"),
        }
    }
    relay_to(&state, &ATS_CHECK, body).await
}

fn peek<T: DeserializeOwned>(body: &Bytes) -> Option<T> {
    serde_json::from_slice(body).ok()
}

async fn relay_to(state: &AppState, endpoint: &RelayEndpoint, body: Bytes) -> Response {
    let outcome = state.relay.forward(endpoint, body).await;
    outcome.respond(endpoint, state.config.relay_fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tailor::Tone;

    #[test]
    fn test_peek_reads_ats_request() {
        let body = Bytes::from_static(br#"{"resumeText":"Jane Doe","jobText":"Platform lead"}"#);
        let req = peek::<AtsRequest>(&body).unwrap();
        assert_eq!(req.resume_text, "Jane Doe");
        assert_eq!(req.job_text.as_deref(), Some("Platform lead"));
    }

    #[test]
    fn test_peek_reads_tailor_request() {
        let body = Bytes::from_static(br#"{"masterText":"x","jobText":"y","tone":"friendly"}"#);
        let req = peek::<TailorRequest>(&body).unwrap();
        assert_eq!(req.tone, Tone::Friendly);
    }

    #[test]
    fn test_peek_tolerates_other_shapes() {
        assert!(peek::<AtsRequest>(&Bytes::from_static(b"not json")).is_none());
        assert!(peek::<AtsRequest>(&Bytes::from_static(br#"{"jobText":"no resume"}"#)).is_none());
        assert!(peek::<TailorRequest>(&Bytes::new()).is_none());
    }
}
