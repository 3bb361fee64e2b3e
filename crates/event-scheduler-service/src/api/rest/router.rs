//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// Create the main API router
///
/// `config.events_path` must already be validated; axum panics on malformed
/// route paths.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    // axum hands HEAD to the GET handler unless HEAD has its own endpoint.
    let events = get(handlers::list_events)
        .head(handlers::method_not_allowed)
        .post(handlers::create_event)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed);

    let mut router = Router::new()
        .route(&config.events_path, events)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ));
    }

    router.with_state(state)
}
