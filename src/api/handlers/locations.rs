//! Handlers for location management endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::locations::{
    CreateLocationRequest, LocationItem, LocationListResponse, UpdateLocationRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all locations with the number of ads assigned to each.
///
/// # Endpoint
///
/// `GET /api/locations`
pub async fn list_locations_handler(
    State(state): State<AppState>,
) -> Result<Json<LocationListResponse>, AppError> {
    let locations = state.location_service.list_locations().await?;

    Ok(Json(LocationListResponse {
        items: locations.into_iter().map(LocationItem::from).collect(),
    }))
}

/// Creates a location.
///
/// # Endpoint
///
/// `POST /api/locations`
///
/// # Errors
///
/// Returns 400 if the slug is malformed or the dimension is unknown or disabled.
/// Returns 409 if the slug is taken.
pub async fn create_location_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<LocationItem>), AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .create_location(payload.name, payload.slug, payload.dimension)
        .await?;

    Ok((StatusCode::CREATED, Json(location.into())))
}

/// # Endpoint
///
/// `GET /api/locations/{id}`
pub async fn get_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LocationItem>, AppError> {
    let location = state.location_service.get_location(id).await?;
    Ok(Json(location.into()))
}

/// Partially updates a location.
///
/// # Endpoint
///
/// `PATCH /api/locations/{id}`
///
/// # Errors
///
/// Returns 400 on invalid fields, 404 if missing, 409 if the new slug is taken.
pub async fn update_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<Json<LocationItem>, AppError> {
    payload.validate()?;

    let location = state
        .location_service
        .update_location(id, payload.into())
        .await?;

    Ok(Json(location.into()))
}

/// Deletes a location. Its ads remain, without a location.
///
/// # Endpoint
///
/// `DELETE /api/locations/{id}`
pub async fn delete_location_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.location_service.delete_location(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
