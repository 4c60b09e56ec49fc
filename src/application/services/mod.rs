//! Business logic services for the application layer.

pub mod ad_selector;
pub mod ad_service;
pub mod auth_service;
pub mod click_tracker;
pub mod content_renderer;
pub mod location_service;
pub mod settings_service;

pub use ad_selector::AdSelector;
pub use ad_service::AdService;
pub use auth_service::AuthService;
pub use click_tracker::{ClickError, ClickOutcome, ClickTracker};
pub use content_renderer::{ContentContext, ContentRenderer};
pub use location_service::LocationService;
pub use settings_service::SettingsService;
