//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::preview_handler;
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /preview/{target}` - Demo page embedding one ad
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/preview/{target}", get(preview_handler))
}
