//! Lifecycle and rendering entry points.
//!
//! [`AdPostsHooks`] is the single interface the HTTP layer and the admin CLI
//! call into. Each rendering call opens its own [`RequestScope`], so cached
//! lookups never outlive the request that made them.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::scope::RequestScope;
use crate::application::services::{
    ClickOutcome, ClickTracker, ContentContext, ContentRenderer, SettingsService,
};
use crate::domain::entities::AdTarget;
use crate::domain::repositories::{
    AdRepository, CounterRepository, LocationRepository, SettingsRepository,
};
use crate::error::AppError;
use crate::rendering::ShortcodeAttrs;

/// Named entry points of the ad engine.
#[async_trait]
pub trait AdPostsHooks: Send + Sync {
    /// Resets the enabled sizes to the default set.
    async fn on_activate(&self) -> Result<(), AppError>;

    /// Clears the enabled sizes.
    async fn on_deactivate(&self) -> Result<(), AppError>;

    /// Filters post content: in-content insertion, then shortcode expansion.
    async fn on_render_content(&self, content: &str, context: ContentContext) -> String;

    /// Renders a single shortcode.
    async fn on_shortcode(&self, attrs: &ShortcodeAttrs) -> String;

    /// Records a click posted by the front-end script.
    async fn on_ajax_click(&self, raw_ad_id: Option<&str>) -> ClickOutcome;

    /// Renders an ad from a raw id or location slug.
    async fn render_ad(&self, target: &str) -> String;
}

/// [`AdPostsHooks`] implemented over the application services.
pub struct AdPosts<A, L, S, C>
where
    A: AdRepository,
    L: LocationRepository,
    S: SettingsRepository,
    C: CounterRepository,
{
    renderer: Arc<ContentRenderer<A, L, S, C>>,
    clicks: Arc<ClickTracker<C>>,
    settings: Arc<SettingsService<S, L>>,
}

impl<A, L, S, C> AdPosts<A, L, S, C>
where
    A: AdRepository,
    L: LocationRepository,
    S: SettingsRepository,
    C: CounterRepository,
{
    pub fn new(
        renderer: Arc<ContentRenderer<A, L, S, C>>,
        clicks: Arc<ClickTracker<C>>,
        settings: Arc<SettingsService<S, L>>,
    ) -> Self {
        Self {
            renderer,
            clicks,
            settings,
        }
    }
}

#[async_trait]
impl<A, L, S, C> AdPostsHooks for AdPosts<A, L, S, C>
where
    A: AdRepository + 'static,
    L: LocationRepository + 'static,
    S: SettingsRepository + 'static,
    C: CounterRepository + 'static,
{
    async fn on_activate(&self) -> Result<(), AppError> {
        let settings = self.settings.activate().await?;
        tracing::info!(sizes = ?settings.sizes, "Activated");
        Ok(())
    }

    async fn on_deactivate(&self) -> Result<(), AppError> {
        self.settings.deactivate().await?;
        tracing::info!("Deactivated");
        Ok(())
    }

    async fn on_render_content(&self, content: &str, context: ContentContext) -> String {
        let mut scope = RequestScope::new();
        self.renderer
            .filter_content(content, context, &mut scope)
            .await
    }

    async fn on_shortcode(&self, attrs: &ShortcodeAttrs) -> String {
        let mut scope = RequestScope::new();
        self.renderer.render_shortcode(attrs, &mut scope).await
    }

    async fn on_ajax_click(&self, raw_ad_id: Option<&str>) -> ClickOutcome {
        self.clicks.record_click(raw_ad_id).await
    }

    async fn render_ad(&self, target: &str) -> String {
        let Some(target) = AdTarget::parse(target) else {
            return String::new();
        };
        let mut scope = RequestScope::new();
        self.renderer.render_target(&target, &mut scope).await
    }
}
