//! Ad entity and the data needed to render one.

use chrono::{DateTime, Utc};

use super::dimension::{self, BannerSize};

/// A stored ad with its counters.
#[derive(Debug, Clone, PartialEq)]
pub struct Ad {
    pub id: i64,
    pub title: String,
    /// Raw creative markup or ad-network code. Emitted unescaped.
    pub body: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub location_id: Option<i64>,
    pub view_count: i64,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What an ad displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creative<'a> {
    Image { src: &'a str },
    Markup(&'a str),
}

/// Input data for creating a new ad.
#[derive(Debug, Clone, Default)]
pub struct NewAd {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub location_id: Option<i64>,
}

/// Partial update for an existing ad.
///
/// `None` fields are left unchanged; `Some(None)` clears a nullable field.
#[derive(Debug, Clone, Default)]
pub struct AdPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<Option<String>>,
    pub target_url: Option<Option<String>>,
    pub location_id: Option<Option<i64>>,
}

/// Where an ad should come from: a specific ad, or a random ad of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdTarget {
    Id(i64),
    Location(String),
}

impl AdTarget {
    /// Parses a raw shortcode or query value.
    ///
    /// All-digit input is an ad id (zero and overflowing values are rejected);
    /// anything else non-empty is a location slug.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<i64>()
                .ok()
                .filter(|id| *id > 0)
                .map(AdTarget::Id);
        }

        Some(AdTarget::Location(raw.to_string()))
    }
}

/// A selected ad ready to be turned into markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableAd {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
    pub target_url: Option<String>,
    pub dimension: String,
    pub size: BannerSize,
}

impl RenderableAd {
    pub fn new(ad: Ad, dimension: &str) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            body: ad.body,
            image_url: ad.image_url,
            target_url: ad.target_url,
            dimension: dimension.to_string(),
            size: dimension::resolve(dimension),
        }
    }

    /// Image ads take precedence over the body markup.
    pub fn creative(&self) -> Creative<'_> {
        match self.image_url.as_deref().filter(|s| !s.is_empty()) {
            Some(src) => Creative::Image { src },
            None => Creative::Markup(&self.body),
        }
    }
}
