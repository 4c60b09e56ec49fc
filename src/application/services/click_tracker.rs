//! Click recording for the AJAX click endpoint.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// Why a click was not recorded. Only logged; the wire sees `error`.
#[derive(Debug, Error)]
pub enum ClickError {
    #[error("ad_id is missing")]
    Missing,

    #[error("ad_id {0:?} is not a positive integer")]
    Invalid(String),

    #[error("failed to store click: {0}")]
    Storage(#[from] AppError),
}

/// Result reported to the click handler script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Success,
    Error,
}

impl ClickOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Records clicks on rendered ads.
///
/// Any positive id is accepted, including ids no ad has yet: the counter
/// row is created on first click.
pub struct ClickTracker<C: CounterRepository> {
    counters: Arc<C>,
}

impl<C: CounterRepository> ClickTracker<C> {
    pub fn new(counters: Arc<C>) -> Self {
        Self { counters }
    }

    /// Increments the click counter for the raw `ad_id` form value.
    pub async fn record_click(&self, raw_ad_id: Option<&str>) -> ClickOutcome {
        match self.try_record(raw_ad_id).await {
            Ok((ad_id, clicks)) => {
                tracing::debug!(ad_id, clicks, "Click recorded");
                ClickOutcome::Success
            }
            Err(e @ ClickError::Storage(_)) => {
                tracing::warn!(error = %e, "Click not recorded");
                ClickOutcome::Error
            }
            Err(e) => {
                tracing::debug!(error = %e, "Click rejected");
                ClickOutcome::Error
            }
        }
    }

    async fn try_record(&self, raw_ad_id: Option<&str>) -> Result<(i64, i64), ClickError> {
        let ad_id = parse_ad_id(raw_ad_id.ok_or(ClickError::Missing)?)?;
        let clicks = self.counters.increment_clicks(ad_id).await?;
        Ok((ad_id, clicks))
    }
}

fn parse_ad_id(raw: &str) -> Result<i64, ClickError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClickError::Missing);
    }

    trimmed
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ClickError::Invalid(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCounterRepository;
    use serde_json::json;

    #[test]
    fn test_parse_ad_id() {
        assert_eq!(parse_ad_id("42").unwrap(), 42);
        assert_eq!(parse_ad_id(" 8 ").unwrap(), 8);
        assert!(matches!(parse_ad_id(""), Err(ClickError::Missing)));
        assert!(matches!(parse_ad_id("abc"), Err(ClickError::Invalid(_))));
        assert!(matches!(parse_ad_id("12abc"), Err(ClickError::Invalid(_))));
        assert!(matches!(parse_ad_id("0"), Err(ClickError::Invalid(_))));
        assert!(matches!(parse_ad_id("-3"), Err(ClickError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_record_click_success() {
        let mut counters = MockCounterRepository::new();
        counters
            .expect_increment_clicks()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(1));

        let tracker = ClickTracker::new(Arc::new(counters));

        assert_eq!(tracker.record_click(Some("42")).await, ClickOutcome::Success);
    }

    #[tokio::test]
    async fn test_record_click_invalid_input_does_not_touch_storage() {
        let mut counters = MockCounterRepository::new();
        counters.expect_increment_clicks().never();

        let tracker = ClickTracker::new(Arc::new(counters));

        assert_eq!(tracker.record_click(None).await, ClickOutcome::Error);
        assert_eq!(tracker.record_click(Some("")).await, ClickOutcome::Error);
        assert_eq!(tracker.record_click(Some("banner")).await, ClickOutcome::Error);
        assert_eq!(tracker.record_click(Some("0")).await, ClickOutcome::Error);
    }

    #[tokio::test]
    async fn test_record_click_storage_error() {
        let mut counters = MockCounterRepository::new();
        counters
            .expect_increment_clicks()
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let tracker = ClickTracker::new(Arc::new(counters));

        assert_eq!(tracker.record_click(Some("5")).await, ClickOutcome::Error);
    }

    #[test]
    fn test_outcome_wire_value() {
        assert_eq!(ClickOutcome::Success.as_str(), "success");
        assert_eq!(ClickOutcome::Error.as_str(), "error");
    }
}
