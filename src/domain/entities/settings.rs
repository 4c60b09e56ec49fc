//! Process-wide plugin settings.

use super::dimension::DEFAULT_SIZES;

/// Persisted settings singleton.
///
/// An empty `sizes` list means "use [`DEFAULT_SIZES`]". `in_content_position`
/// is 1-based; 0 means no paragraph is selected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub sizes: Vec<String>,
    pub in_content_enabled: bool,
    pub in_content_location_id: Option<i64>,
    pub in_content_position: i32,
}

impl Settings {
    /// Enabled dimension names, falling back to the defaults.
    pub fn effective_sizes(&self) -> Vec<String> {
        if self.sizes.is_empty() {
            DEFAULT_SIZES.iter().map(|s| s.to_string()).collect()
        } else {
            self.sizes.clone()
        }
    }

    pub fn is_size_enabled(&self, name: &str) -> bool {
        if self.sizes.is_empty() {
            DEFAULT_SIZES.contains(&name)
        } else {
            self.sizes.iter().any(|s| s == name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_sizes_default() {
        let settings = Settings::default();
        assert_eq!(
            settings.effective_sizes(),
            vec!["300x250", "468x60", "728x90"]
        );
        assert!(settings.is_size_enabled("468x60"));
        assert!(!settings.is_size_enabled("responsive"));
    }

    #[test]
    fn test_effective_sizes_configured() {
        let settings = Settings {
            sizes: vec!["responsive".to_string(), "88x31".to_string()],
            ..Default::default()
        };
        assert_eq!(settings.effective_sizes(), vec!["responsive", "88x31"]);
        assert!(settings.is_size_enabled("responsive"));
        assert!(!settings.is_size_enabled("300x250"));
    }
}
