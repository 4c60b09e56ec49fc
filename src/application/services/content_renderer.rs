//! Ad rendering into pages and post content.

use std::sync::Arc;

use crate::application::scope::RequestScope;
use crate::domain::entities::AdTarget;
use crate::domain::repositories::{
    AdRepository, CounterRepository, LocationRepository, SettingsRepository,
};
use crate::rendering::{ShortcodeAttrs, find_shortcodes, insert_at, render_ad};

use super::AdSelector;

/// Kind of page the content is shown on.
///
/// In-content insertion only happens on single-post pages; shortcodes are
/// expanded everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentContext {
    Single,
    Archive,
}

/// Renders ads as markup and splices them into post content.
///
/// Every method returns a string: lookups that fail or find nothing render
/// as an empty string so a page never breaks because of an ad.
pub struct ContentRenderer<A, L, S, C>
where
    A: AdRepository,
    L: LocationRepository,
    S: SettingsRepository,
    C: CounterRepository,
{
    selector: AdSelector<A, L, C>,
    locations: Arc<L>,
    settings: Arc<S>,
}

impl<A, L, S, C> ContentRenderer<A, L, S, C>
where
    A: AdRepository,
    L: LocationRepository,
    S: SettingsRepository,
    C: CounterRepository,
{
    pub fn new(selector: AdSelector<A, L, C>, locations: Arc<L>, settings: Arc<S>) -> Self {
        Self {
            selector,
            locations,
            settings,
        }
    }

    /// Selects an ad for `target` and renders it.
    pub async fn render_target(&self, target: &AdTarget, scope: &mut RequestScope) -> String {
        let Some(ad) = self.selector.select(target, scope).await else {
            return String::new();
        };

        render_ad(&ad).unwrap_or_else(|e| {
            tracing::error!(ad_id = ad.id, error = %e, "Failed to render ad markup");
            String::new()
        })
    }

    /// Renders one shortcode. Without `ad` or `location` the result is empty.
    pub async fn render_shortcode(
        &self,
        attrs: &ShortcodeAttrs,
        scope: &mut RequestScope,
    ) -> String {
        match attrs.target() {
            Some(target) => self.render_target(&target, scope).await,
            None => {
                tracing::debug!(?attrs, "Shortcode without ad or location");
                String::new()
            }
        }
    }

    /// Replaces every shortcode in `content` with its rendered ad.
    pub async fn expand_shortcodes(&self, content: &str, scope: &mut RequestScope) -> String {
        let shortcodes = find_shortcodes(content);
        if shortcodes.is_empty() {
            return content.to_string();
        }

        let mut out = String::with_capacity(content.len());
        let mut cursor = 0;
        for shortcode in shortcodes {
            out.push_str(&content[cursor..shortcode.span.start]);
            out.push_str(&self.render_shortcode(&shortcode.attrs, scope).await);
            cursor = shortcode.span.end;
        }
        out.push_str(&content[cursor..]);

        out
    }

    /// Filters post content for display.
    ///
    /// Shortcodes in the author's content are expanded for every context.
    /// On single-post pages the configured location's ad is then inserted
    /// after the configured paragraph. Inserted ad markup is never scanned
    /// for shortcodes.
    pub async fn filter_content(
        &self,
        content: &str,
        context: ContentContext,
        scope: &mut RequestScope,
    ) -> String {
        let content = self.expand_shortcodes(content, scope).await;

        match context {
            ContentContext::Single => self.insert_in_content(&content, scope).await,
            ContentContext::Archive => content,
        }
    }

    async fn insert_in_content(&self, content: &str, scope: &mut RequestScope) -> String {
        let settings = match scope.settings(self.settings.as_ref()).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load settings");
                return content.to_string();
            }
        };

        let position = usize::try_from(settings.in_content_position).unwrap_or(0);
        if !settings.in_content_enabled || position == 0 {
            return content.to_string();
        }
        let Some(location_id) = settings.in_content_location_id else {
            return content.to_string();
        };

        let location = match scope
            .location_by_id(self.locations.as_ref(), location_id)
            .await
        {
            Ok(Some(location)) => location,
            Ok(None) => {
                tracing::debug!(location_id, "In-content location no longer exists");
                return content.to_string();
            }
            Err(e) => {
                tracing::error!(location_id, error = %e, "Failed to load in-content location");
                return content.to_string();
            }
        };

        let ad = self
            .render_target(&AdTarget::Location(location.slug), scope)
            .await;
        if ad.is_empty() {
            return content.to_string();
        }

        insert_at(content, &ad, position)
    }
}
