//! HTML page handlers.

pub mod preview;

pub use preview::preview_handler;
