//! Handlers for ad management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::ads::{AdItem, AdListQuery, AdListResponse, CreateAdRequest, UpdateAdRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Lists ads, newest first.
///
/// # Endpoint
///
/// `GET /api/ads?location_id=<id>`
pub async fn list_ads_handler(
    State(state): State<AppState>,
    Query(query): Query<AdListQuery>,
) -> Result<Json<AdListResponse>, AppError> {
    let ads = state.ad_service.list_ads(query.location_id).await?;

    Ok(Json(AdListResponse {
        items: ads.into_iter().map(AdItem::from).collect(),
    }))
}

/// Creates an ad.
///
/// # Endpoint
///
/// `POST /api/ads`
///
/// # Errors
///
/// Returns 400 if a field is invalid or the location does not exist.
pub async fn create_ad_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<AdItem>), AppError> {
    payload.validate()?;

    let ad = state.ad_service.create_ad(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(ad.into())))
}

/// Returns one ad with its view and click counts.
///
/// # Endpoint
///
/// `GET /api/ads/{id}`
pub async fn get_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AdItem>, AppError> {
    let ad = state.ad_service.get_ad(id).await?;
    Ok(Json(ad.into()))
}

/// Partially updates an ad.
///
/// # Endpoint
///
/// `PATCH /api/ads/{id}`
///
/// # Errors
///
/// Returns 400 if a field is invalid.
/// Returns 404 if the ad does not exist.
pub async fn update_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateAdRequest>,
) -> Result<Json<AdItem>, AppError> {
    payload.validate()?;

    let ad = state.ad_service.update_ad(id, payload.into()).await?;

    Ok(Json(ad.into()))
}

/// Deletes an ad and its counters.
///
/// # Endpoint
///
/// `DELETE /api/ads/{id}`
pub async fn delete_ad_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.ad_service.delete_ad(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
