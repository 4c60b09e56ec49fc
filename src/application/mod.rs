//! Application layer: services, request scope and hooks.
//!
//! Services consume repository traits and hold the business rules. The
//! [`hooks::AdPostsHooks`] trait is the entry point the HTTP layer calls for
//! rendering and click tracking.
//!
//! # Available Services
//!
//! - [`services::AdService`] - Ad CRUD with URL and location checks
//! - [`services::LocationService`] - Location CRUD, slug and dimension rules
//! - [`services::SettingsService`] - Settings singleton and activation lifecycle
//! - [`services::AdSelector`] - Picks an ad for an id or location, records views
//! - [`services::ContentRenderer`] - Markup, shortcodes, in-content insertion
//! - [`services::ClickTracker`] - Click counting
//! - [`services::AuthService`] - Admin API token authentication

pub mod hooks;
pub mod scope;
pub mod services;

pub use hooks::{AdPosts, AdPostsHooks};
pub use scope::RequestScope;
