//! Repository trait for per-ad view and click counters.

use crate::error::AppError;
use async_trait::async_trait;

/// Atomic counter storage.
///
/// Each increment is a single upsert statement: an id without a counter row
/// starts at 1, otherwise the stored value grows by exactly 1. Concurrent
/// increments for the same ad never lose updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Increments the view counter and returns the new value.
    async fn increment_views(&self, ad_id: i64) -> Result<i64, AppError>;

    /// Increments the click counter and returns the new value.
    async fn increment_clicks(&self, ad_id: i64) -> Result<i64, AppError>;
}
