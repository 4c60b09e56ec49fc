//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::hooks::{AdPosts, AdPostsHooks};
use crate::application::services::{
    AdSelector, AdService, AuthService, ClickTracker, ContentRenderer, LocationService,
    SettingsService,
};
use crate::infrastructure::persistence::{
    PgAdRepository, PgCounterRepository, PgLocationRepository, PgSettingsRepository,
    PgTokenRepository,
};

pub type PgAdService = AdService<PgAdRepository, PgLocationRepository>;
pub type PgLocationService = LocationService<PgLocationRepository, PgSettingsRepository>;
pub type PgSettingsService = SettingsService<PgSettingsRepository, PgLocationRepository>;
pub type PgAuthService = AuthService<PgTokenRepository>;
pub type PgContentRenderer = ContentRenderer<
    PgAdRepository,
    PgLocationRepository,
    PgSettingsRepository,
    PgCounterRepository,
>;

/// Services shared across requests.
///
/// Rendering and click tracking go through `hooks`; the admin API uses the
/// CRUD services directly.
#[derive(Clone)]
pub struct AppState {
    pub ad_service: Arc<PgAdService>,
    pub location_service: Arc<PgLocationService>,
    pub settings_service: Arc<PgSettingsService>,
    pub auth_service: Arc<PgAuthService>,
    pub hooks: Arc<dyn AdPostsHooks>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let ad_repo = Arc::new(PgAdRepository::new(pool.clone()));
        let location_repo = Arc::new(PgLocationRepository::new(pool.clone()));
        let settings_repo = Arc::new(PgSettingsRepository::new(pool.clone()));
        let counter_repo = Arc::new(PgCounterRepository::new(pool.clone()));
        let token_repo = Arc::new(PgTokenRepository::new(pool));

        let settings_service = Arc::new(SettingsService::new(
            settings_repo.clone(),
            location_repo.clone(),
        ));

        let renderer: Arc<PgContentRenderer> = Arc::new(ContentRenderer::new(
            AdSelector::new(ad_repo.clone(), location_repo.clone(), counter_repo.clone()),
            location_repo.clone(),
            settings_repo.clone(),
        ));

        let hooks = Arc::new(AdPosts::new(
            renderer,
            Arc::new(ClickTracker::new(counter_repo)),
            settings_service.clone(),
        ));

        Self {
            ad_service: Arc::new(AdService::new(ad_repo, location_repo.clone())),
            location_service: Arc::new(LocationService::new(location_repo, settings_repo)),
            settings_service,
            auth_service: Arc::new(AuthService::new(token_repo, token_signing_secret)),
            hooks,
        }
    }
}
