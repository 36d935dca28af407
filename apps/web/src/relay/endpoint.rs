use serde_json::Value;

use crate::relay::mock::{mock_ats_response, mock_tailor_response};

/// One relayed operation: where it goes upstream and what to answer when it can't.
#[derive(Debug, Clone, Copy)]
pub struct RelayEndpoint {
    /// Logical operation name, used in logs.
    pub name: &'static str,
    /// Path below `{base}/api/v1/`.
    pub subpath: &'static str,
    /// Builds the fixed payload returned on fallback.
    pub mock: fn() -> Value,
}

pub const TAILOR: RelayEndpoint = RelayEndpoint {
    name: "tailor",
    subpath: "tailor",
    mock: mock_tailor_response,
};

pub const ATS_CHECK: RelayEndpoint = RelayEndpoint {
    name: "ats-check",
    subpath: "ats/check",
    mock: mock_ats_response,
};

impl RelayEndpoint {
    /// Full upstream URL for this endpoint. `base` must not end with `/`.
    pub fn upstream_url(&self, base: &str) -> String {
        format!("{base}/api/v1/{}", self.subpath)
    }
}
