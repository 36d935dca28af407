use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status and whether requests are relayed upstream or mocked.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = if state.relay.is_configured() {
        "upstream"
    } else {
        "mock"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resumind-web",
        "mode": mode,
        "started_at": state.started_at,
    }))
}
