//! Standard banner dimensions and their pixel sizes.
//!
//! Locations store a dimension by name (`"300x250"`, `"responsive"`, ...).
//! [`resolve`] maps that name to a [`BannerSize`]; unknown names behave like
//! `responsive` so a location with a stale or custom dimension still renders.

use std::fmt;

/// Name of the fluid dimension.
pub const RESPONSIVE: &str = "responsive";

/// Dimensions enabled when nothing has been configured.
pub const DEFAULT_SIZES: [&str; 3] = ["300x250", "468x60", "728x90"];

/// Fixed-size banners, in display order.
const FIXED_SIZES: [(&str, u32, u32); 17] = [
    ("88x31", 88, 31),
    ("120x60", 120, 60),
    ("120x90", 120, 90),
    ("120x240", 120, 240),
    ("120x600", 120, 600),
    ("125x125", 125, 125),
    ("160x600", 160, 600),
    ("180x150", 180, 150),
    ("234x60", 234, 60),
    ("250x250", 250, 250),
    ("300x100", 300, 100),
    ("300x250", 300, 250),
    ("300x600", 300, 600),
    ("336x280", 336, 280),
    ("468x60", 468, 60),
    ("728x90", 728, 90),
    ("728x300", 728, 300),
];

/// Banner height: either a pixel value or `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Auto,
    Px(u32),
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Px(h) => write!(f, "{}", h),
        }
    }
}

/// Resolved pixel size of a dimension.
///
/// `width` is `None` for responsive and unknown dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerSize {
    pub width: Option<u32>,
    pub height: Height,
}

impl BannerSize {
    pub const FLUID: BannerSize = BannerSize {
        width: None,
        height: Height::Auto,
    };

    /// Returns `WxH` when both sides are fixed.
    pub fn pixels(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Height::Px(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }

    /// Name of the image rendition used for image creatives.
    pub fn image_size_name(&self) -> String {
        match self.pixels() {
            Some(px) => format!("ad-{}", px),
            None => "ad-responsive".to_string(),
        }
    }
}

/// Resolves a dimension name to its pixel size.
///
/// Pure and total: `responsive` and any unrecognised name resolve to
/// [`BannerSize::FLUID`].
pub fn resolve(name: &str) -> BannerSize {
    FIXED_SIZES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(_, w, h)| BannerSize {
            width: Some(w),
            height: Height::Px(h),
        })
        .unwrap_or(BannerSize::FLUID)
}

/// Returns true for `responsive` and the 17 fixed sizes.
pub fn is_standard(name: &str) -> bool {
    name == RESPONSIVE || FIXED_SIZES.iter().any(|(n, _, _)| *n == name)
}

/// All 18 standard dimension names, `responsive` first.
pub fn standard_names() -> impl Iterator<Item = &'static str> {
    std::iter::once(RESPONSIVE).chain(FIXED_SIZES.iter().map(|(n, _, _)| *n))
}
