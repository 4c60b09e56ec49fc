//! Settings singleton service and the activation lifecycle.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::Settings;
use crate::domain::entities::dimension::{self, DEFAULT_SIZES};
use crate::domain::repositories::{LocationRepository, SettingsRepository};
use crate::error::AppError;

/// Reads and writes the process-wide settings.
pub struct SettingsService<S: SettingsRepository, L: LocationRepository> {
    settings: Arc<S>,
    locations: Arc<L>,
}

impl<S: SettingsRepository, L: LocationRepository> SettingsService<S, L> {
    pub fn new(settings: Arc<S>, locations: Arc<L>) -> Self {
        Self {
            settings,
            locations,
        }
    }

    /// Returns the stored settings, or defaults if none were saved.
    pub async fn get_settings(&self) -> Result<Settings, AppError> {
        Ok(self.settings.load().await?.unwrap_or_default())
    }

    /// Replaces the settings.
    ///
    /// Duplicate sizes are dropped, keeping first occurrence order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a size is not a standard dimension,
    /// the position is negative, or the insertion location does not exist.
    pub async fn update_settings(&self, mut settings: Settings) -> Result<Settings, AppError> {
        let unknown: Vec<&str> = settings
            .sizes
            .iter()
            .map(String::as_str)
            .filter(|s| !dimension::is_standard(s))
            .collect();
        if !unknown.is_empty() {
            return Err(AppError::bad_request(
                "Unknown dimension",
                json!({"sizes": unknown}),
            ));
        }

        let mut sizes: Vec<String> = Vec::with_capacity(settings.sizes.len());
        for size in settings.sizes.drain(..) {
            if !sizes.contains(&size) {
                sizes.push(size);
            }
        }
        settings.sizes = sizes;

        if settings.in_content_position < 0 {
            return Err(AppError::bad_request(
                "in_content_position must not be negative",
                json!({"in_content_position": settings.in_content_position}),
            ));
        }

        if let Some(location_id) = settings.in_content_location_id
            && self.locations.find_by_id(location_id).await?.is_none()
        {
            return Err(AppError::bad_request(
                "Location does not exist",
                json!({"in_content_location_id": location_id}),
            ));
        }

        let saved = self.settings.save(settings).await?;
        tracing::info!(
            sizes = ?saved.sizes,
            in_content_enabled = saved.in_content_enabled,
            "Settings updated"
        );

        Ok(saved)
    }

    /// Resets enabled sizes to the default set, keeping other settings.
    pub async fn activate(&self) -> Result<Settings, AppError> {
        let mut settings = self.get_settings().await?;
        settings.sizes = DEFAULT_SIZES.iter().map(|s| s.to_string()).collect();
        self.settings.save(settings).await
    }

    /// Clears the enabled sizes, keeping other settings.
    pub async fn deactivate(&self) -> Result<Settings, AppError> {
        let mut settings = self.get_settings().await?;
        settings.sizes.clear();
        self.settings.save(settings).await
    }

    /// Activates on first start, when no settings row exists yet.
    ///
    /// Returns true if the settings were created.
    pub async fn ensure_initialized(&self) -> Result<bool, AppError> {
        if self.settings.load().await?.is_some() {
            return Ok(false);
        }
        self.activate().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLocationRepository, MockSettingsRepository};

    fn saving(settings: &mut MockSettingsRepository) {
        settings.expect_save().returning(Ok);
    }

    #[tokio::test]
    async fn test_get_settings_defaults() {
        let mut settings = MockSettingsRepository::new();
        settings.expect_load().returning(|| Ok(None));

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));
        let current = service.get_settings().await.unwrap();

        assert!(current.sizes.is_empty());
        assert_eq!(current.effective_sizes(), vec!["300x250", "468x60", "728x90"]);
        assert!(!current.in_content_enabled);
    }

    #[tokio::test]
    async fn test_update_settings_dedupes_sizes() {
        let mut settings = MockSettingsRepository::new();
        saving(&mut settings);

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));
        let saved = service
            .update_settings(Settings {
                sizes: vec![
                    "728x90".to_string(),
                    "responsive".to_string(),
                    "728x90".to_string(),
                ],
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(saved.sizes, vec!["728x90", "responsive"]);
    }

    #[tokio::test]
    async fn test_update_settings_rejects_unknown_size() {
        let mut settings = MockSettingsRepository::new();
        settings.expect_save().never();

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));
        let result = service
            .update_settings(Settings {
                sizes: vec!["100x100".to_string()],
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_settings_rejects_negative_position() {
        let mut settings = MockSettingsRepository::new();
        settings.expect_save().never();

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));
        let result = service
            .update_settings(Settings {
                in_content_position: -1,
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_settings_unknown_location() {
        let mut settings = MockSettingsRepository::new();
        settings.expect_save().never();

        let mut locations = MockLocationRepository::new();
        locations.expect_find_by_id().returning(|_| Ok(None));

        let service = SettingsService::new(Arc::new(settings), Arc::new(locations));
        let result = service
            .update_settings(Settings {
                in_content_enabled: true,
                in_content_location_id: Some(12),
                in_content_position: 2,
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_activate_and_deactivate() {
        let mut settings = MockSettingsRepository::new();
        settings.expect_load().returning(|| {
            Ok(Some(Settings {
                sizes: vec!["88x31".to_string()],
                in_content_enabled: true,
                in_content_location_id: Some(1),
                in_content_position: 3,
            }))
        });
        saving(&mut settings);

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));

        let activated = service.activate().await.unwrap();
        assert_eq!(activated.sizes, vec!["300x250", "468x60", "728x90"]);
        assert!(activated.in_content_enabled);
        assert_eq!(activated.in_content_position, 3);

        let deactivated = service.deactivate().await.unwrap();
        assert!(deactivated.sizes.is_empty());
        assert_eq!(deactivated.in_content_location_id, Some(1));
    }

    #[tokio::test]
    async fn test_ensure_initialized_only_once() {
        let mut settings = MockSettingsRepository::new();
        settings
            .expect_load()
            .returning(|| Ok(Some(Settings::default())));
        settings.expect_save().never();

        let service = SettingsService::new(Arc::new(settings), Arc::new(MockLocationRepository::new()));

        assert!(!service.ensure_initialized().await.unwrap());
    }
}
