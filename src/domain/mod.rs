//! Domain layer: entities and repository contracts.
//!
//! The domain layer has no dependency on HTTP or SQL. Repository traits
//! define the storage contract implemented in
//! [`crate::infrastructure::persistence`]; services in
//! [`crate::application::services`] orchestrate them.
//!
//! # Rendering Flow
//!
//! 1. A shortcode, template call or content filter names an ad id or location slug
//! 2. [`entities::AdTarget::parse`] classifies the raw value
//! 3. The ad selector resolves the location, picks an ad and bumps its view counter
//! 4. [`crate::rendering`] turns the [`entities::RenderableAd`] into markup

pub mod entities;
pub mod repositories;
