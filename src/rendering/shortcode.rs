//! `[wp-adposts ...]` shortcode parsing.
//!
//! Both `[wp-adposts ...]` and the shorter `[adposts ...]` are recognised.
//! Attribute values may be double-quoted, single-quoted or bare:
//!
//! ```text
//! [wp-adposts ad="3"]
//! [adposts location='sidebar']
//! [wp-adposts location=header]
//! ```

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::domain::entities::AdTarget;

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:wp-adposts|adposts)(\s[^\]]*)?\]").unwrap());

static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'\]]+))"#).unwrap()
});

/// Recognised shortcode attributes. Unknown attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcodeAttrs {
    pub ad: Option<String>,
    pub location: Option<String>,
}

impl ShortcodeAttrs {
    /// Parses the attribute text between the tag name and `]`.
    pub fn parse(raw: &str) -> Self {
        let mut attrs = Self::default();

        for caps in ATTR_REGEX.captures_iter(raw) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str().to_string());

            match caps[1].to_ascii_lowercase().as_str() {
                "ad" => attrs.ad = value,
                "location" => attrs.location = value,
                _ => {}
            }
        }

        attrs
    }

    /// The ad to render. Neither attribute yields `None`.
    ///
    /// A present `ad` attribute wins over `location` even when it is empty,
    /// and must hold a positive id. A non-numeric `ad` value renders nothing
    /// and is not looked up as a location slug. `location` is always taken
    /// as a slug.
    pub fn target(&self) -> Option<AdTarget> {
        if let Some(ad) = &self.ad {
            return match AdTarget::parse(ad) {
                Some(AdTarget::Id(id)) => Some(AdTarget::Id(id)),
                _ => None,
            };
        }
        non_blank(&self.location).map(|slug| AdTarget::Location(slug.to_string()))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// A shortcode occurrence in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode {
    /// Byte range of the whole `[...]` tag.
    pub span: Range<usize>,
    pub attrs: ShortcodeAttrs,
}

/// Finds all shortcodes in `content`, in order of appearance.
pub fn find_shortcodes(content: &str) -> Vec<Shortcode> {
    SHORTCODE_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let attrs = caps
                .get(1)
                .map(|m| ShortcodeAttrs::parse(m.as_str()))
                .unwrap_or_default();
            Some(Shortcode {
                span: whole.range(),
                attrs,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_styles() {
        assert_eq!(
            ShortcodeAttrs::parse(r#" ad="3""#).ad.as_deref(),
            Some("3")
        );
        assert_eq!(
            ShortcodeAttrs::parse(" location='side-bar'").location.as_deref(),
            Some("side-bar")
        );
        assert_eq!(
            ShortcodeAttrs::parse(" location=header").location.as_deref(),
            Some("header")
        );
        assert_eq!(
            ShortcodeAttrs::parse(r#" AD = "9" extra="x""#).ad.as_deref(),
            Some("9")
        );
    }

    #[test]
    fn test_ad_wins_over_location() {
        let attrs = ShortcodeAttrs::parse(r#" location="sidebar" ad="4""#);
        assert_eq!(attrs.target(), Some(AdTarget::Id(4)));
    }

    #[test]
    fn test_location_target() {
        let attrs = ShortcodeAttrs::parse(r#" location="sidebar""#);
        assert_eq!(
            attrs.target(),
            Some(AdTarget::Location("sidebar".to_string()))
        );
    }

    #[test]
    fn test_no_recognised_attributes() {
        assert_eq!(ShortcodeAttrs::parse(r#" size="big""#).target(), None);
        assert_eq!(ShortcodeAttrs::default().target(), None);
    }

    #[test]
    fn test_attribute_kinds_are_not_mixed() {
        assert_eq!(ShortcodeAttrs::parse(r#" ad="sidebar""#).target(), None);
        assert_eq!(
            ShortcodeAttrs::parse(r#" location="2024""#).target(),
            Some(AdTarget::Location("2024".to_string()))
        );
    }

    #[test]
    fn test_empty_ad_does_not_fall_back_to_location() {
        let attrs = ShortcodeAttrs::parse(r#" ad="" location="footer""#);
        assert_eq!(attrs.target(), None);

        let attrs = ShortcodeAttrs::parse(r#" ad="  " location="footer""#);
        assert_eq!(attrs.target(), None);
    }

    #[test]
    fn test_find_shortcodes() {
        let content = r#"<p>Hi</p>[wp-adposts ad="1"] and [adposts location=top][adposts]"#;
        let found = find_shortcodes(content);

        assert_eq!(found.len(), 3);
        assert_eq!(&content[found[0].span.clone()], r#"[wp-adposts ad="1"]"#);
        assert_eq!(found[1].attrs.location.as_deref(), Some("top"));
        assert_eq!(found[2].attrs, ShortcodeAttrs::default());
    }

    #[test]
    fn test_other_shortcodes_ignored() {
        assert!(find_shortcodes("[gallery ids=\"1,2\"] [adposts-old ad=1] [wp-adpostsx]").is_empty());
    }
}
