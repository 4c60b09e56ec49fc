//! Repository trait for ad storage.

use crate::domain::entities::{Ad, AdPatch, NewAd};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for ads.
///
/// Ads are returned with their view and click counters joined in; counters
/// themselves are written through [`super::CounterRepository`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Creates a new ad.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `location_id` references a missing location.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_ad: NewAd) -> Result<Ad, AppError>;

    /// Finds an ad by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError>;

    /// Lists ads, newest first, optionally restricted to one location.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, location_id: Option<i64>) -> Result<Vec<Ad>, AppError>;

    /// One ad of the location chosen uniformly at random, `None` if it has no ads.
    async fn random_in_location(&self, location_id: i64) -> Result<Option<Ad>, AppError>;

    /// Partially updates an ad.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: AdPatch) -> Result<Ad, AppError>;

    /// Deletes an ad and its counters.
    ///
    /// Returns `Ok(false)` if no ad had this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
