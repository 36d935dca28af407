pub mod health;

use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::errors::AppError;
use crate::relay::handlers;
use crate::state::AppState;
use crate::stub;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/tailor", post(handlers::handle_tailor))
        .route("/api/ats", post(handlers::handle_ats));

    if state.config.stub_upstream {
        router = router.merge(stub::router());
    }

    router.fallback(not_found).with_state(state)
}

/// CORS for the configured origins. A `*` entry allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
