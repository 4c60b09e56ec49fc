//! Repository trait for the settings singleton.

use crate::domain::entities::Settings;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for the single settings row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the stored settings, or `None` if they were never saved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn load(&self) -> Result<Option<Settings>, AppError>;

    /// Stores the settings, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the insertion location does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, settings: Settings) -> Result<Settings, AppError>;
}
