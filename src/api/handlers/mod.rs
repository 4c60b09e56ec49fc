//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ads;
pub mod health;
pub mod locations;
pub mod render;
pub mod settings;

pub use ads::{
    create_ad_handler, delete_ad_handler, get_ad_handler, list_ads_handler, update_ad_handler,
};
pub use health::health_handler;
pub use locations::{
    create_location_handler, delete_location_handler, get_location_handler,
    list_locations_handler, update_location_handler,
};
pub use render::{click_handler, content_handler, render_handler};
pub use settings::{dimensions_handler, get_settings_handler, update_settings_handler};
