//! DTOs for the settings and dimension endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Settings;

/// Request body for `PUT /api/settings`. Replaces all settings.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    /// Enabled dimension names. Empty means the default set.
    #[serde(default)]
    pub sizes: Vec<String>,

    #[serde(default)]
    pub in_content_enabled: bool,

    pub in_content_location_id: Option<i64>,

    /// 1-based paragraph after which the ad is inserted; 0 disables.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub in_content_position: i32,
}

impl From<UpdateSettingsRequest> for Settings {
    fn from(r: UpdateSettingsRequest) -> Self {
        Settings {
            sizes: r.sizes,
            in_content_enabled: r.in_content_enabled,
            in_content_location_id: r.in_content_location_id,
            in_content_position: r.in_content_position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub sizes: Vec<String>,
    /// `sizes`, or the defaults when `sizes` is empty.
    pub effective_sizes: Vec<String>,
    pub in_content_enabled: bool,
    pub in_content_location_id: Option<i64>,
    pub in_content_position: i32,
}

impl From<Settings> for SettingsResponse {
    fn from(s: Settings) -> Self {
        SettingsResponse {
            effective_sizes: s.effective_sizes(),
            sizes: s.sizes,
            in_content_enabled: s.in_content_enabled,
            in_content_location_id: s.in_content_location_id,
            in_content_position: s.in_content_position,
        }
    }
}

/// One row of the standard dimension table.
#[derive(Debug, Serialize)]
pub struct DimensionItem {
    pub name: String,
    pub width: Option<u32>,
    pub height: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct DimensionListResponse {
    pub items: Vec<DimensionItem>,
}
