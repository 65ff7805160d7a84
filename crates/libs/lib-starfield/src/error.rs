//! # Starfield Errors
//!
//! Only configuration handling can fail. Layer generation, the shooting-star
//! lifecycle and scene building operate on internally generated or
//! environment-provided values and never return errors.

use thiserror::Error;

/// Convenience type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a [`StarfieldConfig`](crate::config::StarfieldConfig).
#[derive(Debug, Error)]
pub enum Error {
    /// A config value is outside its accepted range.
    #[error("Invalid starfield config: {0}")]
    InvalidConfig(String),

    /// A variant name that is neither `parallax` nor `ambient`.
    #[error("Unknown starfield variant: {0}")]
    UnknownVariant(String),

    /// Config overrides were not valid JSON or had unexpected fields.
    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
