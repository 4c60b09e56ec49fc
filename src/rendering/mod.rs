//! Turning selected ads into HTML.
//!
//! - [`markup`] - Ad creative and wrapper templates
//! - [`paragraphs`] - Insertion after the n-th paragraph of post content
//! - [`shortcode`] - `[wp-adposts ...]` shortcode parsing

pub mod markup;
pub mod paragraphs;
pub mod shortcode;

pub use markup::render_ad;
pub use paragraphs::insert_at;
pub use shortcode::{Shortcode, ShortcodeAttrs, find_shortcodes};
