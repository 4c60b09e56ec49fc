//! Location entity: a named slot that groups ads of one banner dimension.

use chrono::{DateTime, Utc};

/// A named ad location.
///
/// The `slug` is the public lookup key used by `location=` shortcodes and
/// the render endpoint. `dimension` may be absent, in which case nothing is
/// rendered for the location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub dimension: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Creates a new Location instance.
    pub fn new(
        id: i64,
        name: String,
        slug: String,
        dimension: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            dimension,
            created_at,
        }
    }

    /// The assigned dimension, treating an empty string as unset.
    pub fn assigned_dimension(&self) -> Option<&str> {
        self.dimension.as_deref().filter(|d| !d.is_empty())
    }
}

/// Input data for creating a new location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub slug: String,
    pub dimension: Option<String>,
}

/// Partial update for a location.
///
/// `dimension: Some(None)` clears the dimension.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub dimension: Option<Option<String>>,
}

/// A location together with the number of ads assigned to it.
#[derive(Debug, Clone)]
pub struct LocationSummary {
    pub location: Location,
    pub ad_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(dimension: Option<&str>) -> Location {
        Location::new(
            1,
            "Sidebar".to_string(),
            "sidebar".to_string(),
            dimension.map(str::to_string),
            Utc::now(),
        )
    }

    #[test]
    fn test_assigned_dimension() {
        assert_eq!(location(Some("300x250")).assigned_dimension(), Some("300x250"));
        assert_eq!(location(None).assigned_dimension(), None);
        assert_eq!(location(Some("")).assigned_dimension(), None);
    }
}
