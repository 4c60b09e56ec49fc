//! Handlers for settings and the dimension table.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::settings::{
    DimensionItem, DimensionListResponse, SettingsResponse, UpdateSettingsRequest,
};
use crate::domain::entities::dimension;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/settings`
pub async fn get_settings_handler(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let settings = state.settings_service.get_settings().await?;
    Ok(Json(settings.into()))
}

/// Replaces the settings.
///
/// # Endpoint
///
/// `PUT /api/settings`
///
/// # Errors
///
/// Returns 400 for unknown sizes, a negative position or a missing location.
pub async fn update_settings_handler(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    payload.validate()?;

    let settings = state.settings_service.update_settings(payload.into()).await?;

    Ok(Json(settings.into()))
}

/// Lists the 18 standard dimensions and whether each is enabled.
///
/// # Endpoint
///
/// `GET /api/dimensions`
pub async fn dimensions_handler(
    State(state): State<AppState>,
) -> Result<Json<DimensionListResponse>, AppError> {
    let settings = state.settings_service.get_settings().await?;

    let items = dimension::standard_names()
        .map(|name| {
            let size = dimension::resolve(name);
            DimensionItem {
                name: name.to_string(),
                width: size.width,
                height: size.height.to_string(),
                enabled: settings.is_size_enabled(name),
            }
        })
        .collect();

    Ok(Json(DimensionListResponse { items }))
}
