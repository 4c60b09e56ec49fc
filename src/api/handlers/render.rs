//! Public rendering and click tracking endpoints.
//!
//! None of these handlers fail on a missing ad: rendering answers with empty
//! markup and the click endpoint answers `error` with status 200, which is
//! what the front-end script expects.

use axum::{
    Form, Json,
    extract::{Query, State, rejection::FormRejection},
    http::header,
    response::{Html, IntoResponse},
};

use crate::api::dto::content::{ClickForm, ContentRequest, ContentResponse, RenderQuery};
use crate::rendering::ShortcodeAttrs;
use crate::state::AppState;

/// Renders an ad as an HTML fragment.
///
/// # Endpoint
///
/// `GET /render?ad=<id>&location=<slug>`
///
/// Same rules as the shortcode: `ad` wins over `location`, and the body is
/// empty when nothing can be shown.
pub async fn render_handler(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Html<String> {
    let attrs = ShortcodeAttrs {
        ad: query.ad,
        location: query.location,
    };

    Html(state.hooks.on_shortcode(&attrs).await)
}

/// Filters post content for display.
///
/// # Endpoint
///
/// `POST /content`
///
/// # Request Body
///
/// ```json
/// { "content": "<p>One</p><p>Two</p>", "context": "single" }
/// ```
pub async fn content_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContentRequest>,
) -> Json<ContentResponse> {
    let content = state
        .hooks
        .on_render_content(&payload.content, payload.context.into())
        .await;

    Json(ContentResponse { content })
}

/// Records a click on a rendered ad.
///
/// # Endpoint
///
/// `POST /ajax/click` with form field `ad_id`
///
/// # Response
///
/// Always `200 OK` with a plain-text body of `success` or `error`.
pub async fn click_handler(
    State(state): State<AppState>,
    form: Result<Form<ClickForm>, FormRejection>,
) -> impl IntoResponse {
    let ad_id = match form {
        Ok(Form(form)) => form.ad_id,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Malformed click form");
            None
        }
    };

    let outcome = state.hooks.on_ajax_click(ad_id.as_deref()).await;

    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        outcome.as_str(),
    )
}
