//! DTOs for ad management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Ad, AdPatch, NewAd};

/// Request body for `POST /api/ads`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Raw creative markup or ad-network code.
    #[serde(default)]
    pub body: String,

    #[validate(url(message = "Invalid URL format"))]
    pub image_url: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub target_url: Option<String>,

    pub location_id: Option<i64>,
}

impl From<CreateAdRequest> for NewAd {
    fn from(r: CreateAdRequest) -> Self {
        NewAd {
            title: r.title,
            body: r.body,
            image_url: r.image_url,
            target_url: r.target_url,
            location_id: r.location_id,
        }
    }
}

/// Request body for `PATCH /api/ads/{id}`.
///
/// Absent fields are unchanged; `null` clears `image_url`, `target_url`
/// or `location_id`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAdRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    pub body: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub image_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_url: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location_id: Option<Option<i64>>,
}

impl From<UpdateAdRequest> for AdPatch {
    fn from(r: UpdateAdRequest) -> Self {
        AdPatch {
            title: r.title,
            body: r.body,
            image_url: r.image_url,
            target_url: r.target_url,
            location_id: r.location_id,
        }
    }
}

/// Query string for `GET /api/ads`.
#[derive(Debug, Deserialize)]
pub struct AdListQuery {
    pub location_id: Option<i64>,
}

/// An ad with its counters.
#[derive(Debug, Serialize)]
pub struct AdItem {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub location_id: Option<i64>,
    pub view_count: i64,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ad> for AdItem {
    fn from(ad: Ad) -> Self {
        AdItem {
            id: ad.id,
            title: ad.title,
            body: ad.body,
            image_url: ad.image_url,
            target_url: ad.target_url,
            location_id: ad.location_id,
            view_count: ad.view_count,
            click_count: ad.click_count,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdListResponse {
    pub items: Vec<AdItem>,
}
