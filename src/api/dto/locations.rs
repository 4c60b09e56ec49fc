//! DTOs for location management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Location, LocationSummary, UpdateLocation, dimension};

/// Request body for `POST /api/locations`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    pub slug: String,

    /// Standard dimension name, e.g. `"300x250"` or `"responsive"`.
    pub dimension: Option<String>,
}

/// Request body for `PATCH /api/locations/{id}`.
///
/// `dimension: null` removes the dimension, which stops the location from
/// rendering.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub slug: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub dimension: Option<Option<String>>,
}

impl From<UpdateLocationRequest> for UpdateLocation {
    fn from(r: UpdateLocationRequest) -> Self {
        UpdateLocation {
            name: r.name,
            slug: r.slug,
            dimension: r.dimension,
        }
    }
}

/// A location with its resolved pixel size.
#[derive(Debug, Serialize)]
pub struct LocationItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub dimension: Option<String>,
    pub width: Option<u32>,
    /// Pixel height, or `"auto"`.
    pub height: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_count: Option<i64>,

    pub created_at: DateTime<Utc>,
}

impl From<Location> for LocationItem {
    fn from(l: Location) -> Self {
        let size = dimension::resolve(l.assigned_dimension().unwrap_or_default());
        LocationItem {
            id: l.id,
            name: l.name,
            slug: l.slug,
            dimension: l.dimension,
            width: size.width,
            height: size.height.to_string(),
            ad_count: None,
            created_at: l.created_at,
        }
    }
}

impl From<LocationSummary> for LocationItem {
    fn from(s: LocationSummary) -> Self {
        LocationItem {
            ad_count: Some(s.ad_count),
            ..s.location.into()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub items: Vec<LocationItem>,
}
