//! Core domain entities.
//!
//! Entities are plain data structures. Creation and update inputs use
//! separate structs (`NewAd`, `AdPatch`, `NewLocation`, `UpdateLocation`).
//!
//! # Entity Types
//!
//! - [`Ad`] - A stored ad and its view/click counters
//! - [`Location`] - A named slot grouping ads of one dimension
//! - [`Settings`] - The settings singleton
//! - [`dimension`] - The standard banner size table

pub mod ad;
pub mod dimension;
pub mod location;
pub mod settings;

pub use ad::{Ad, AdPatch, AdTarget, Creative, NewAd, RenderableAd};
pub use dimension::{BannerSize, Height};
pub use location::{Location, LocationSummary, NewLocation, UpdateLocation};
pub use settings::Settings;
