//! Ad management service.

use serde_json::json;
use std::sync::Arc;
use url::Url;

use crate::domain::entities::{Ad, AdPatch, NewAd};
use crate::domain::repositories::{AdRepository, LocationRepository};
use crate::error::AppError;

/// Service for creating and maintaining ads.
///
/// Checks that URLs are absolute http(s) URLs and that referenced locations
/// exist before anything reaches storage.
pub struct AdService<A: AdRepository, L: LocationRepository> {
    ads: Arc<A>,
    locations: Arc<L>,
}

impl<A: AdRepository, L: LocationRepository> AdService<A, L> {
    pub fn new(ads: Arc<A>, locations: Arc<L>) -> Self {
        Self { ads, locations }
    }

    /// Creates a new ad.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title is blank, a URL is not
    /// an absolute http(s) URL, or the location does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_ad(&self, mut new_ad: NewAd) -> Result<Ad, AppError> {
        new_ad.title = validate_title(&new_ad.title)?;
        if let Some(url) = &new_ad.image_url {
            validate_url("image_url", url)?;
        }
        if let Some(url) = &new_ad.target_url {
            validate_url("target_url", url)?;
        }
        if let Some(location_id) = new_ad.location_id {
            self.ensure_location(location_id).await?;
        }

        let ad = self.ads.create(new_ad).await?;
        tracing::info!(ad_id = ad.id, "Ad created");

        Ok(ad)
    }

    /// Retrieves an ad with its counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the ad does not exist.
    pub async fn get_ad(&self, id: i64) -> Result<Ad, AppError> {
        self.ads
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Ad not found", json!({"id": id})))
    }

    pub async fn list_ads(&self, location_id: Option<i64>) -> Result<Vec<Ad>, AppError> {
        self.ads.list(location_id).await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::create_ad`] for the provided fields.
    /// Returns [`AppError::NotFound`] if the ad does not exist.
    pub async fn update_ad(&self, id: i64, mut patch: AdPatch) -> Result<Ad, AppError> {
        if let Some(title) = patch.title.take() {
            patch.title = Some(validate_title(&title)?);
        }
        if let Some(Some(url)) = &patch.image_url {
            validate_url("image_url", url)?;
        }
        if let Some(Some(url)) = &patch.target_url {
            validate_url("target_url", url)?;
        }
        if let Some(Some(location_id)) = patch.location_id {
            self.ensure_location(location_id).await?;
        }

        self.ads.update(id, patch).await
    }

    /// Deletes an ad together with its counters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the ad does not exist.
    pub async fn delete_ad(&self, id: i64) -> Result<(), AppError> {
        if !self.ads.delete(id).await? {
            return Err(AppError::not_found("Ad not found", json!({"id": id})));
        }

        tracing::info!(ad_id = id, "Ad deleted");
        Ok(())
    }

    async fn ensure_location(&self, location_id: i64) -> Result<(), AppError> {
        if self.locations.find_by_id(location_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Location does not exist",
                json!({"location_id": location_id}),
            ));
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request(
            "Title must not be empty",
            json!({"field": "title"}),
        ));
    }
    Ok(title.to_string())
}

fn validate_url(field: &str, raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request(
            "Invalid URL",
            json!({"field": field, "url": raw, "reason": e.to_string()}),
        )
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "Unsupported URL scheme",
            json!({"field": field, "scheme": parsed.scheme(), "allowed": ["http", "https"]}),
        ));
    }

    Ok(())
}
