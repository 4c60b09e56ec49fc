//! Ad selection by id or by location.

use std::sync::Arc;

use crate::application::scope::RequestScope;
use crate::domain::entities::{Ad, AdTarget, RenderableAd};
use crate::domain::repositories::{AdRepository, CounterRepository, LocationRepository};
use crate::error::AppError;

/// Resolves an [`AdTarget`] to one renderable ad and records the view.
///
/// Selection never fails a page: storage errors are logged and treated as
/// "nothing to show".
pub struct AdSelector<A, L, C>
where
    A: AdRepository,
    L: LocationRepository,
    C: CounterRepository,
{
    ads: Arc<A>,
    locations: Arc<L>,
    counters: Arc<C>,
}

impl<A, L, C> AdSelector<A, L, C>
where
    A: AdRepository,
    L: LocationRepository,
    C: CounterRepository,
{
    pub fn new(ads: Arc<A>, locations: Arc<L>, counters: Arc<C>) -> Self {
        Self {
            ads,
            locations,
            counters,
        }
    }

    /// Selects an ad and increments its view counter by one.
    ///
    /// - By id: the ad must exist and belong to a location that has a dimension.
    /// - By slug: the location must exist and have a dimension; one of its ads
    ///   is picked uniformly at random.
    ///
    /// A failed view-count write is logged and the ad is still returned.
    pub async fn select(
        &self,
        target: &AdTarget,
        scope: &mut RequestScope,
    ) -> Option<RenderableAd> {
        let found = match target {
            AdTarget::Id(id) => self.find_by_id(*id, scope).await,
            AdTarget::Location(slug) => self.find_by_location(slug, scope).await,
        };

        let (ad, dimension) = match found {
            Ok(Some(found)) => found,
            Ok(None) => {
                tracing::debug!(?target, "No ad to render");
                return None;
            }
            Err(e) => {
                tracing::error!(?target, error = %e, "Ad lookup failed");
                return None;
            }
        };

        if let Err(e) = self.counters.increment_views(ad.id).await {
            tracing::warn!(ad_id = ad.id, error = %e, "Failed to record ad view");
        }

        Some(RenderableAd::new(ad, &dimension))
    }

    async fn find_by_id(
        &self,
        id: i64,
        scope: &mut RequestScope,
    ) -> Result<Option<(Ad, String)>, AppError> {
        let Some(ad) = self.ads.find_by_id(id).await? else {
            return Ok(None);
        };
        let Some(location_id) = ad.location_id else {
            return Ok(None);
        };
        let Some(location) = scope
            .location_by_id(self.locations.as_ref(), location_id)
            .await?
        else {
            return Ok(None);
        };

        Ok(location
            .assigned_dimension()
            .map(|dimension| (ad, dimension.to_string())))
    }

    async fn find_by_location(
        &self,
        slug: &str,
        scope: &mut RequestScope,
    ) -> Result<Option<(Ad, String)>, AppError> {
        let Some(location) = scope
            .location_by_slug(self.locations.as_ref(), slug)
            .await?
        else {
            return Ok(None);
        };
        let Some(dimension) = location.assigned_dimension().map(str::to_string) else {
            return Ok(None);
        };

        let ad = self.ads.random_in_location(location.id).await?;

        Ok(ad.map(|ad| (ad, dimension)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Location;
    use crate::domain::entities::dimension::Height;
    use crate::domain::repositories::{
        MockAdRepository, MockCounterRepository, MockLocationRepository,
    };
    use chrono::Utc;
    use serde_json::json;

    fn ad(id: i64, location_id: Option<i64>) -> Ad {
        Ad {
            id,
            title: format!("Ad {}", id),
            body: "<b>buy</b>".to_string(),
            image_url: None,
            target_url: None,
            location_id,
            view_count: 0,
            click_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn location(id: i64, dimension: Option<&str>) -> Location {
        Location::new(
            id,
            "Header".to_string(),
            "header".to_string(),
            dimension.map(str::to_string),
            Utc::now(),
        )
    }

    fn counting(times: usize) -> MockCounterRepository {
        let mut counters = MockCounterRepository::new();
        counters
            .expect_increment_views()
            .times(times)
            .returning(|_| Ok(1));
        counters
    }

    fn selector(
        ads: MockAdRepository,
        locations: MockLocationRepository,
        counters: MockCounterRepository,
    ) -> AdSelector<MockAdRepository, MockLocationRepository, MockCounterRepository> {
        AdSelector::new(Arc::new(ads), Arc::new(locations), Arc::new(counters))
    }

    #[tokio::test]
    async fn test_select_by_id() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Ok(Some(ad(7, Some(2)))));

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_id()
            .returning(|id| Ok(Some(location(id, Some("728x90")))));

        let mut counters = MockCounterRepository::new();
        counters
            .expect_increment_views()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(1));

        let selector = selector(ads, locations, counters);
        let selected = selector
            .select(&AdTarget::Id(7), &mut RequestScope::new())
            .await
            .unwrap();

        assert_eq!(selected.id, 7);
        assert_eq!(selected.dimension, "728x90");
        assert_eq!(selected.size.width, Some(728));
        assert_eq!(selected.size.height, Height::Px(90));
    }

    #[tokio::test]
    async fn test_select_by_id_without_location() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id().returning(|_| Ok(Some(ad(7, None))));

        let mut locations = MockLocationRepository::new();
        locations.expect_find_by_id().never();

        let selector = selector(ads, locations, counting(0));
        let selected = selector
            .select(&AdTarget::Id(7), &mut RequestScope::new())
            .await;

        assert!(selected.is_none());
    }

    #[tokio::test]
    async fn test_select_by_id_location_without_dimension() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id().returning(|_| Ok(Some(ad(7, Some(2)))));

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_id()
            .returning(|id| Ok(Some(location(id, None))));

        let selector = selector(ads, locations, counting(0));

        assert!(
            selector
                .select(&AdTarget::Id(7), &mut RequestScope::new())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_select_by_missing_id() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id().returning(|_| Ok(None));

        let selector = selector(ads, MockLocationRepository::new(), counting(0));

        assert!(
            selector
                .select(&AdTarget::Id(404), &mut RequestScope::new())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_select_by_location_single_ad() {
        let mut ads = MockAdRepository::new();
        ads.expect_random_in_location()
            .withf(|location_id| *location_id == 3)
            .returning(|_| Ok(Some(ad(11, Some(3)))));

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_slug()
            .returning(|_| Ok(Some(location(3, Some("responsive")))));

        let selector = selector(ads, locations, counting(3));

        for _ in 0..3 {
            let selected = selector
                .select(
                    &AdTarget::Location("header".to_string()),
                    &mut RequestScope::new(),
                )
                .await
                .unwrap();
            assert_eq!(selected.id, 11);
            assert_eq!(selected.size.width, None);
        }
    }

    #[tokio::test]
    async fn test_select_by_location_without_ads() {
        let mut ads = MockAdRepository::new();
        ads.expect_random_in_location().returning(|_| Ok(None));

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_slug()
            .returning(|_| Ok(Some(location(3, Some("300x250")))));

        let selector = selector(ads, locations, counting(0));

        assert!(
            selector
                .select(
                    &AdTarget::Location("header".to_string()),
                    &mut RequestScope::new()
                )
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_select_by_unknown_location() {
        let mut ads = MockAdRepository::new();
        ads.expect_random_in_location().never();

        let mut locations = MockLocationRepository::new();
        locations.expect_find_by_slug().returning(|_| Ok(None));

        let selector = selector(ads, locations, counting(0));

        assert!(
            selector
                .select(
                    &AdTarget::Location("nowhere".to_string()),
                    &mut RequestScope::new()
                )
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_view_count_failure_still_renders() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id()
            .returning(|_| Ok(Some(ad(5, Some(1)))));

        let mut locations = MockLocationRepository::new();
        locations
            .expect_find_by_id()
            .returning(|id| Ok(Some(location(id, Some("468x60")))));

        let mut counters = MockCounterRepository::new();
        counters
            .expect_increment_views()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let selector = selector(ads, locations, counters);

        assert!(
            selector
                .select(&AdTarget::Id(5), &mut RequestScope::new())
                .await
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_lookup_error_yields_none() {
        let mut ads = MockAdRepository::new();
        ads.expect_find_by_id()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let selector = selector(ads, MockLocationRepository::new(), counting(0));

        assert!(
            selector
                .select(&AdTarget::Id(5), &mut RequestScope::new())
                .await
                .is_none()
        );
    }
}
