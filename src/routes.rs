//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page (public)
//! - `/login`, `/register`, `/logout` - Auth forms (public)
//! - `/dashboard/*`      - Admin UI (session cookie required)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Session gate** - Cookie check with redirect to `/login`
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{rate_limit, session_gate, tracing};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads the client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let dashboard = web::routes::dashboard_routes()
        .route_layer(middleware::from_fn(session_gate::layer))
        .layer(rate_limit::form_layer(behind_proxy));

    let public = web::routes::public_routes().layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .merge(public)
        .nest("/dashboard", dashboard)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
