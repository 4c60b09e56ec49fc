//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod ads;
pub mod content;
pub mod health;
pub mod locations;
pub mod settings;
