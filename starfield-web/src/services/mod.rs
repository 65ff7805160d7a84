//! Browser services

pub mod timers;

pub use timers::BrowserTimers;
