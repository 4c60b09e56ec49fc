//! Per-request memoization of settings and location lookups.

use std::collections::HashMap;

use crate::domain::entities::{Location, Settings};
use crate::domain::repositories::{LocationRepository, SettingsRepository};
use crate::error::AppError;

/// Lookups cached for the duration of one request.
///
/// A content filter pass can render many shortcodes against the same
/// location; the scope makes each distinct lookup hit storage once. Create
/// one per request and drop it when the response is built. Misses are
/// cached too, errors are not.
#[derive(Debug, Default)]
pub struct RequestScope {
    settings: Option<Settings>,
    by_id: HashMap<i64, Option<Location>>,
    by_slug: HashMap<String, Option<Location>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored settings, or defaults if none were ever saved.
    pub async fn settings<S>(&mut self, repo: &S) -> Result<Settings, AppError>
    where
        S: SettingsRepository + ?Sized,
    {
        if let Some(settings) = &self.settings {
            return Ok(settings.clone());
        }

        let settings = repo.load().await?.unwrap_or_default();
        self.settings = Some(settings.clone());
        Ok(settings)
    }

    pub async fn location_by_id<L>(
        &mut self,
        repo: &L,
        id: i64,
    ) -> Result<Option<Location>, AppError>
    where
        L: LocationRepository + ?Sized,
    {
        if let Some(cached) = self.by_id.get(&id) {
            return Ok(cached.clone());
        }

        let location = repo.find_by_id(id).await?;
        self.remember(location.as_ref());
        self.by_id.insert(id, location.clone());
        Ok(location)
    }

    pub async fn location_by_slug<L>(
        &mut self,
        repo: &L,
        slug: &str,
    ) -> Result<Option<Location>, AppError>
    where
        L: LocationRepository + ?Sized,
    {
        if let Some(cached) = self.by_slug.get(slug) {
            return Ok(cached.clone());
        }

        let location = repo.find_by_slug(slug).await?;
        self.remember(location.as_ref());
        self.by_slug.insert(slug.to_string(), location.clone());
        Ok(location)
    }

    fn remember(&mut self, location: Option<&Location>) {
        if let Some(l) = location {
            self.by_id.insert(l.id, Some(l.clone()));
            self.by_slug.insert(l.slug.clone(), Some(l.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLocationRepository, MockSettingsRepository};
    use chrono::Utc;

    fn sidebar() -> Location {
        Location::new(
            4,
            "Sidebar".to_string(),
            "sidebar".to_string(),
            Some("300x250".to_string()),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_settings_loaded_once() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_load().times(1).returning(|| {
            Ok(Some(Settings {
                in_content_enabled: true,
                ..Default::default()
            }))
        });

        let mut scope = RequestScope::new();
        assert!(scope.settings(&repo).await.unwrap().in_content_enabled);
        assert!(scope.settings(&repo).await.unwrap().in_content_enabled);
    }

    #[tokio::test]
    async fn test_missing_settings_default() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_load().times(1).returning(|| Ok(None));

        let mut scope = RequestScope::new();
        assert_eq!(scope.settings(&repo).await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_location_shared_between_keys() {
        let mut repo = MockLocationRepository::new();
        repo.expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(sidebar())));
        repo.expect_find_by_id().never();

        let mut scope = RequestScope::new();
        let by_slug = scope.location_by_slug(&repo, "sidebar").await.unwrap();
        let by_id = scope.location_by_id(&repo, 4).await.unwrap();
        let again = scope.location_by_slug(&repo, "sidebar").await.unwrap();

        assert_eq!(by_slug, by_id);
        assert_eq!(by_slug, again);
    }

    #[tokio::test]
    async fn test_misses_are_cached() {
        let mut repo = MockLocationRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut scope = RequestScope::new();
        assert!(scope.location_by_id(&repo, 9).await.unwrap().is_none());
        assert!(scope.location_by_id(&repo, 9).await.unwrap().is_none());
    }
}
