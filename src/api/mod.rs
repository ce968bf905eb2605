//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Customer endpoints are mounted at the root (`/customers`), not under a
//! version prefix.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(openapi::swagger_ui());

    router
}

/// Builds the served application: routes, middleware and state.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    with_middleware(build_router(), request_timeout).with_state(state)
}

/// Wraps a router in the timeout, trace and CORS layers.
///
/// Requests running longer than `request_timeout` get `408 Request Timeout`.
pub fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
