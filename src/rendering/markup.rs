//! Ad markup templates.

use askama::Template;

use crate::domain::entities::{Creative, Height, RenderableAd};

/// Image creative wrapped in a tracked link.
///
/// `data-ad` is read by the click handler script.
#[derive(Template)]
#[template(
    source = r#"<a class="wp-adpost-link" data-ad="{{ id }}" href="{{ href }}" target="_blank"><img src="{{ src }}" alt="{{ title }}" class="attachment-{{ size_name }} size-{{ size_name }}"{% if let Some(w) = width %} width="{{ w }}"{% endif %}{% if let Some(h) = height %} height="{{ h }}"{% endif %} /></a>"#,
    ext = "html"
)]
struct ImageCreative<'a> {
    id: i64,
    href: &'a str,
    src: &'a str,
    title: &'a str,
    size_name: String,
    width: Option<u32>,
    height: Option<u32>,
}

/// Outer wrapper shared by all creatives. `inner` is already markup.
#[derive(Template)]
#[template(
    source = r#"<div id="wp-adpost-{{ id }}" class="wp-adpost wp-adpost-{{ id }}{% if let Some(px) = pixels %} wp-adpost-{{ px }}{% endif %}">{{ inner|safe }}</div>"#,
    ext = "html"
)]
struct AdWrapper<'a> {
    id: i64,
    pixels: Option<String>,
    inner: &'a str,
}

/// Renders a selected ad.
///
/// Image creatives become a linked `<img>` with escaped attributes; any
/// other creative is the raw body, emitted as is.
pub fn render_ad(ad: &RenderableAd) -> Result<String, askama::Error> {
    let inner = match ad.creative() {
        Creative::Image { src } => ImageCreative {
            id: ad.id,
            href: ad.target_url.as_deref().unwrap_or_default(),
            src,
            title: &ad.title,
            size_name: ad.size.image_size_name(),
            width: ad.size.width,
            height: match ad.size.height {
                Height::Px(h) => Some(h),
                Height::Auto => None,
            },
        }
        .render()?,
        Creative::Markup(body) => body.to_string(),
    };

    AdWrapper {
        id: ad.id,
        pixels: ad.size.pixels(),
        inner: &inner,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::dimension;

    fn renderable(dimension_name: &str, image_url: Option<&str>) -> RenderableAd {
        RenderableAd {
            id: 12,
            title: "Fish & \"Chips\"".to_string(),
            body: "<script>show()</script>".to_string(),
            image_url: image_url.map(str::to_string),
            target_url: Some("https://shop.example.com".to_string()),
            dimension: dimension_name.to_string(),
            size: dimension::resolve(dimension_name),
        }
    }

    #[test]
    fn test_markup_creative_is_raw() {
        let html = render_ad(&renderable("300x250", None)).unwrap();

        assert_eq!(
            html,
            r#"<div id="wp-adpost-12" class="wp-adpost wp-adpost-12 wp-adpost-300x250"><script>show()</script></div>"#
        );
    }

    #[test]
    fn test_responsive_has_no_size_class() {
        let html = render_ad(&renderable("responsive", None)).unwrap();

        assert!(html.starts_with(r#"<div id="wp-adpost-12" class="wp-adpost wp-adpost-12">"#));
        assert!(!html.contains("wp-adpost-responsive"));
    }

    #[test]
    fn test_image_creative() {
        let html = render_ad(&renderable("468x60", Some("banner.png"))).unwrap();

        assert!(html.contains(r#"<a class="wp-adpost-link" data-ad="12""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"src="banner.png""#));
        assert!(html.contains(r#"width="468" height="60""#));
        assert!(html.contains("size-ad-468x60"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_image_creative_escapes_attributes() {
        let html = render_ad(&renderable("responsive", Some("banner.png"))).unwrap();

        assert!(html.contains("Fish &amp; "));
        assert!(!html.contains("\"Chips\""));
        assert!(!html.contains("width="));
        assert!(html.contains("size-ad-responsive"));
    }

    #[test]
    fn test_image_without_target_has_empty_href() {
        let mut ad = renderable("728x90", Some("banner.png"));
        ad.target_url = None;

        let html = render_ad(&ad).unwrap();

        assert!(html.contains(r#"href="""#));
    }
}
