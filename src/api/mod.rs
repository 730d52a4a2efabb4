//! HTTP layer - axum router, handlers, extractors and response models.
//!
//! This module is the only place that knows about HTTP. It turns requests into
//! calls on [`crate::core`] and maps [`crate::errors::Error`] to status codes.

/// Error to HTTP response mapping
pub mod error;
/// Request extractors (authentication)
pub mod extractor;
/// Request handlers
pub mod handlers;
/// JSON response shapes
pub mod model;
/// Route tables
pub mod route;

use axum::{Router, http::Method};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{
    LatencyUnit,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` around an open database connection.
    #[must_use]
    pub fn new(database: Arc<DatabaseConnection>) -> Self {
        Self { database }
    }
}

/// Builds the complete application router with tracing and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .merge(route::build_health_check_routers())
        .merge(route::build_hotel_routers())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
