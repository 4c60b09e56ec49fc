//! Ad preview page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::state::AppState;

/// Template for the preview page.
///
/// Renders `templates/preview.html`: a minimal article with the ad embedded,
/// loading the same stylesheet and click handler script a real page would.
#[derive(Template, WebTemplate)]
#[template(path = "preview.html")]
pub struct PreviewTemplate {
    pub target: String,
    /// Rendered ad markup, empty when nothing matched.
    pub ad: String,
}

/// Renders a page showing one ad.
///
/// # Endpoint
///
/// `GET /preview/{target}` where `target` is an ad id or a location slug.
///
/// Rendering through this page counts as a view.
pub async fn preview_handler(
    Path(target): Path<String>,
    State(state): State<AppState>,
) -> PreviewTemplate {
    let ad = state.hooks.render_ad(&target).await;

    PreviewTemplate { target, ad }
}
