use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Built once at startup and carried in `AppState`; handlers never read the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the tailoring/ATS service. `None` means mock-only mode.
    pub api_base_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// CORS origins. A single `*` entry means permissive.
    pub allowed_origins: Vec<String>,
    /// When false, upstream failures surface as 502 instead of the mock payload.
    pub relay_fallback: bool,
    /// Mounts the local development upstream under `/api/v1`.
    pub stub_upstream: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            api_base_url: normalize_base_url(lookup("API_BASE_URL")),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            relay_fallback: parse_flag("RELAY_FALLBACK", lookup("RELAY_FALLBACK"), true)?,
            stub_upstream: parse_flag("STUB_UPSTREAM", lookup("STUB_UPSTREAM"), false)?,
        })
    }

    /// Mock-only configuration, used by tests and as a baseline.
    #[cfg(test)]
    pub fn mock_only() -> Self {
        Config {
            api_base_url: None,
            port: 3000,
            rust_log: "info".to_string(),
            allowed_origins: vec!["*".to_string()],
            relay_fallback: true,
            stub_upstream: false,
        }
    }
}

/// Empty or whitespace-only values count as unset; a trailing slash is dropped.
fn normalize_base_url(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("{key} must be a boolean (true/false), got '{other}'"),
    }
}
