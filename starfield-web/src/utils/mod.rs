//! Utilities

pub mod url;
pub mod viewport;

pub use url::starfield_config;
pub use viewport::{current_viewport, random_seed};
