//! Route definitions for the GiveHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use givehub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(device_routes())
        .merge(need_routes())
        .merge(transfer_routes())
        .merge(voucher_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Device submission, moderation, and device-side match ranking.
fn device_routes() -> Router<AppState> {
    Router::new()
        .route("/devices", post(handlers::device::create_device))
        .route("/devices", get(handlers::device::list_devices))
        .route("/devices/{id}", get(handlers::device::get_device))
        .route(
            "/devices/{id}/status",
            put(handlers::device::moderate_device),
        )
        .route(
            "/devices/{id}/matches",
            get(handlers::matching::matches_for_device),
        )
}

/// Need submission and need-side match ranking.
fn need_routes() -> Router<AppState> {
    Router::new()
        .route("/needs", post(handlers::need::create_need))
        .route("/needs", get(handlers::need::list_needs))
        .route("/needs/{id}", get(handlers::need::get_need))
        .route(
            "/needs/{id}/matches",
            get(handlers::matching::matches_for_need),
        )
}

/// Transfer lifecycle endpoints.
fn transfer_routes() -> Router<AppState> {
    Router::new()
        .route("/transfers", post(handlers::transfer::create_transfer))
        .route("/transfers", get(handlers::transfer::list_transfers))
        .route("/transfers/{id}", get(handlers::transfer::get_transfer))
        .route(
            "/transfers/{id}/status",
            put(handlers::transfer::update_transfer_status),
        )
}

/// Voucher endpoints.
fn voucher_routes() -> Router<AppState> {
    Router::new()
        .route("/vouchers", post(handlers::voucher::issue_voucher))
        .route(
            "/vouchers/verify/{token}",
            get(handlers::voucher::verify_voucher),
        )
        .route(
            "/vouchers/{id}/redeem",
            post(handlers::voucher::redeem_voucher),
        )
}

/// Health check endpoints (no identity headers required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build a CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use axum::http::HeaderValue;
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
