use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::relay::Relay;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub relay: Relay,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config, relay: Relay) -> Self {
        Self {
            config,
            relay,
            started_at: Utc::now(),
        }
    }
}
