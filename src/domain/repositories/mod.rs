//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AdRepository`] - Ad CRUD
//! - [`CounterRepository`] - Atomic view/click counters
//! - [`LocationRepository`] - Location CRUD and lookup by slug
//! - [`SettingsRepository`] - Settings singleton
//! - [`TokenRepository`] - Admin API tokens
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod ad_repository;
pub mod counter_repository;
pub mod location_repository;
pub mod settings_repository;
pub mod token_repository;

pub use ad_repository::AdRepository;
pub use counter_repository::CounterRepository;
pub use location_repository::LocationRepository;
pub use settings_repository::SettingsRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use ad_repository::MockAdRepository;
#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use location_repository::MockLocationRepository;
#[cfg(test)]
pub use settings_repository::MockSettingsRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
