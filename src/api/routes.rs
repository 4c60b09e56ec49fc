//! API route configuration.

use crate::api::handlers::{
    click_handler, content_handler, create_ad_handler, create_location_handler,
    delete_ad_handler, delete_location_handler, dimensions_handler, get_ad_handler,
    get_location_handler, get_settings_handler, list_ads_handler, list_locations_handler,
    render_handler, update_ad_handler, update_location_handler, update_settings_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public rendering and click tracking routes.
///
/// # Endpoints
///
/// - `GET  /render`      - Render an ad by id or location slug (HTML fragment)
/// - `POST /content`     - Filter post content (insertion + shortcodes)
/// - `POST /ajax/click`  - Record a click, answers `success` or `error`
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/render", get(render_handler))
        .route("/content", post(content_handler))
        .route("/ajax/click", post(click_handler))
}

/// Admin routes, protected by Bearer token authentication via
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET    /ads`              - List ads (optional `location_id` filter)
/// - `POST   /ads`              - Create an ad
/// - `GET    /ads/{id}`         - Get an ad with its counters
/// - `PATCH  /ads/{id}`         - Partially update an ad
/// - `DELETE /ads/{id}`         - Delete an ad
/// - `GET    /locations`        - List locations with ad counts
/// - `POST   /locations`        - Create a location
/// - `GET    /locations/{id}`   - Get a location
/// - `PATCH  /locations/{id}`   - Partially update a location
/// - `DELETE /locations/{id}`   - Delete a location
/// - `GET    /settings`         - Current settings
/// - `PUT    /settings`         - Replace settings
/// - `GET    /dimensions`       - Standard dimensions with enabled flags
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(list_ads_handler).post(create_ad_handler))
        .route(
            "/ads/{id}",
            get(get_ad_handler)
                .patch(update_ad_handler)
                .delete(delete_ad_handler),
        )
        .route(
            "/locations",
            get(list_locations_handler).post(create_location_handler),
        )
        .route(
            "/locations/{id}",
            get(get_location_handler)
                .patch(update_location_handler)
                .delete(delete_location_handler),
        )
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .route("/dimensions", get(dimensions_handler))
}
