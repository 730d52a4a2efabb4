use axum::{Router, routing::get};

use super::{
    AppState,
    handlers::{
        health::health_check,
        hotels::{show_hotel, show_hotel_list},
    },
};

/// `/hotels` and `/hotels/:hotel_id`, both behind authentication.
pub fn build_hotel_routers() -> Router<AppState> {
    let hotel_routers = Router::new()
        .route("/", get(show_hotel_list))
        .route("/:hotel_id", get(show_hotel));

    Router::new().nest("/hotels", hotel_routers)
}

/// Unauthenticated liveness probe.
pub fn build_health_check_routers() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
