//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgAdRepository`] - Ad storage, counters joined in on read
//! - [`PgCounterRepository`] - Atomic view/click increments
//! - [`PgLocationRepository`] - Locations and their ad counts
//! - [`PgSettingsRepository`] - The settings singleton row
//! - [`PgTokenRepository`] - Admin API token storage and validation

pub mod pg_ad_repository;
pub mod pg_counter_repository;
pub mod pg_location_repository;
pub mod pg_settings_repository;
pub mod pg_token_repository;

pub use pg_ad_repository::PgAdRepository;
pub use pg_counter_repository::PgCounterRepository;
pub use pg_location_repository::PgLocationRepository;
pub use pg_settings_repository::PgSettingsRepository;
pub use pg_token_repository::PgTokenRepository;
