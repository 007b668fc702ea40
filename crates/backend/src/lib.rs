use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod guard;
mod handlers;
mod models;
pub mod params;
pub mod routes;
mod schema;
pub mod store;
pub mod workflow;

use crate::auth::AuthConfig;
use crate::store::{CalendarDirectory, EventStore};
use crate::workflow::EventWorkflow;

/// Shared handler state. Holds no mutable data of its own.
#[derive(Clone)]
pub struct AppState {
    pub calendars: Arc<dyn CalendarDirectory>,
    pub workflow: EventWorkflow,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(
        calendars: Arc<dyn CalendarDirectory>,
        events: Arc<dyn EventStore>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            calendars,
            workflow: EventWorkflow::new(events),
            auth_config,
        }
    }
}

/// Build the application router without CORS, as used by tests.
pub fn app(state: AppState) -> Router {
    routes::event_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build CORS layer from the configured origin list.
///
/// An empty list falls back to permissive CORS (for development only).
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<_> = allowed_origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!(
            "CORS_ALLOWED_ORIGINS not set, using permissive CORS (not recommended for production)"
        );
        return CorsLayer::permissive();
    }

    tracing::info!("CORS configured for origins: {:?}", origins);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
