//! Location management service.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::dimension;
use crate::domain::entities::{Location, LocationSummary, NewLocation, UpdateLocation};
use crate::domain::repositories::{LocationRepository, SettingsRepository};
use crate::error::AppError;

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

const MAX_SLUG_LEN: usize = 64;

/// Service for managing ad locations.
///
/// Ensures that:
/// - Slugs are lowercase, hyphen-separated and unique
/// - Dimensions are standard names enabled in the settings
pub struct LocationService<L: LocationRepository, S: SettingsRepository> {
    locations: Arc<L>,
    settings: Arc<S>,
}

impl<L: LocationRepository, S: SettingsRepository> LocationService<L, S> {
    pub fn new(locations: Arc<L>, settings: Arc<S>) -> Self {
        Self {
            locations,
            settings,
        }
    }

    /// Creates a new location.
    ///
    /// An empty dimension is stored as no dimension.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name, malformed slug or
    /// unknown/disabled dimension.
    /// Returns [`AppError::Conflict`] if the slug is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_location(
        &self,
        name: String,
        slug: String,
        dimension: Option<String>,
    ) -> Result<Location, AppError> {
        let name = validate_name(&name)?;
        validate_slug(&slug)?;
        let dimension = self.validate_dimension(dimension).await?;

        if self.locations.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Location slug already exists",
                json!({"slug": slug}),
            ));
        }

        let location = self
            .locations
            .create(NewLocation {
                name,
                slug,
                dimension,
            })
            .await?;
        tracing::info!(location_id = location.id, slug = %location.slug, "Location created");

        Ok(location)
    }

    /// Retrieves a location by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the location does not exist.
    pub async fn get_location(&self, id: i64) -> Result<Location, AppError> {
        self.locations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found", json!({"id": id})))
    }

    /// Lists all locations with their ad counts.
    pub async fn list_locations(&self) -> Result<Vec<LocationSummary>, AppError> {
        self.locations.list().await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::create_location`] for the provided fields.
    /// Returns [`AppError::NotFound`] if the location does not exist.
    /// Returns [`AppError::Conflict`] if the new slug belongs to another location.
    pub async fn update_location(
        &self,
        id: i64,
        mut update: UpdateLocation,
    ) -> Result<Location, AppError> {
        if let Some(name) = update.name.take() {
            update.name = Some(validate_name(&name)?);
        }

        if let Some(slug) = &update.slug {
            validate_slug(slug)?;
            if let Some(existing) = self.locations.find_by_slug(slug).await?
                && existing.id != id
            {
                return Err(AppError::conflict(
                    "Location slug already exists",
                    json!({"slug": slug}),
                ));
            }
        }

        if let Some(dimension) = update.dimension.take() {
            update.dimension = Some(self.validate_dimension(dimension).await?);
        }

        self.locations.update(id, update).await
    }

    /// Deletes a location. Its ads stay, unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the location does not exist.
    pub async fn delete_location(&self, id: i64) -> Result<(), AppError> {
        if !self.locations.delete(id).await? {
            return Err(AppError::not_found(
                "Location not found",
                json!({"id": id}),
            ));
        }

        tracing::info!(location_id = id, "Location deleted");
        Ok(())
    }

    async fn validate_dimension(
        &self,
        dimension: Option<String>,
    ) -> Result<Option<String>, AppError> {
        let Some(dimension) = dimension.filter(|d| !d.trim().is_empty()) else {
            return Ok(None);
        };
        let dimension = dimension.trim().to_string();

        if !dimension::is_standard(&dimension) {
            return Err(AppError::bad_request(
                "Unknown dimension",
                json!({"dimension": dimension, "allowed": dimension::standard_names().collect::<Vec<_>>()}),
            ));
        }

        let settings = self.settings.load().await?.unwrap_or_default();
        if !settings.is_size_enabled(&dimension) {
            return Err(AppError::bad_request(
                "Dimension is not enabled",
                json!({"dimension": dimension, "enabled": settings.effective_sizes()}),
            ));
        }

        Ok(Some(dimension))
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() || name.len() > 255 {
        return Err(AppError::bad_request(
            "Invalid location name length",
            json!({"min": 1, "max": 255}),
        ));
    }
    Ok(name.to_string())
}

fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() > MAX_SLUG_LEN || !SLUG_REGEX.is_match(slug) {
        return Err(AppError::bad_request(
            "Invalid slug",
            json!({
                "slug": slug,
                "hint": "Use lowercase letters, digits and single hyphens",
                "max_length": MAX_SLUG_LEN,
            }),
        ));
    }

    // An all-digit slug would be read back as an ad id.
    if slug.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(
            "Invalid slug",
            json!({"slug": slug, "hint": "Slug must contain at least one letter"}),
        ));
    }

    Ok(())
}
