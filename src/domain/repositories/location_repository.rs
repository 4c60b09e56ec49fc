//! Repository trait for ad locations.

use crate::domain::entities::{Location, LocationSummary, NewLocation, UpdateLocation};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for locations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLocationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Creates a new location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError>;

    /// Finds a location by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError>;

    /// Finds a location by its public slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError>;

    /// Lists all locations ordered by name, with assigned ad counts.
    async fn list(&self) -> Result<Vec<LocationSummary>, AppError>;

    /// Partially updates a location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no location has this id.
    /// Returns [`AppError::Conflict`] if the new slug is already taken.
    async fn update(&self, id: i64, update: UpdateLocation) -> Result<Location, AppError>;

    /// Deletes a location. Ads keep existing with no location.
    ///
    /// Returns `Ok(false)` if no location had this id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
