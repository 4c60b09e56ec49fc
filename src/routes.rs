//! Top-level router combining public, admin and page routes.
//!
//! # Route Structure
//!
//! - `GET  /render`, `POST /content`, `POST /ajax/click` - Public ad endpoints
//! - `GET  /preview/{target}`  - Demo page for one ad
//! - `GET  /health`            - Health check (public)
//! - `/api/*`                  - Admin REST API (Bearer token required)
//! - `/static/*`               - Click handler script and stylesheet
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token on the admin API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory served under `/static`
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    static_dir: impl AsRef<Path>,
) -> NormalizePath<Router> {
    let admin_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer(behind_proxy));

    let public_router = api::routes::public_routes()
        .merge(web::routes::public_routes())
        .layer(rate_limit::layer(behind_proxy));

    let router = Router::new()
        .merge(public_router)
        .route("/health", get(health_handler))
        .nest("/api", admin_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
