//! # Starfield Configuration
//!
//! Timing and spawn policy for the shooting-star scheduler.
//!
//! Two presets exist:
//!
//! | Variant | initial delay | interval | ticks counted from | spawn probability | pointer |
//! |---------|---------------|----------|--------------------|-------------------|---------|
//! | [`Variant::Parallax`] | 1000 ms | 2000 ms | mount | 0.3 | tracked |
//! | [`Variant::Ambient`] | 5000 ms | 60000 ms | first star | 1.0 | ignored |
//!
//! Overrides can be layered on top of a preset from JSON:
//!
//! ```rust
//! use lib_starfield::config::{StarfieldConfig, Variant};
//!
//! let config = StarfieldConfig::from_json(r#"{ "variant": "ambient", "interval_ms": 30000 }"#)?;
//! assert_eq!(config.variant, Variant::Ambient);
//! assert_eq!(config.interval_ms, 30_000);
//! assert_eq!(config.initial_delay_ms, 5_000);
//! # Ok::<(), lib_starfield::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How long a shooting star stays in the live collection.
pub const DISPLAY_MS: u32 = 2_000;

/// When the repeating spawn tick starts counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickAnchor {
    /// Armed on mount: ticks at `k * interval`.
    Mount,
    /// Armed when the first star spawns: ticks at `initial + k * interval`.
    FirstStar,
}

/// Which flavour of starfield to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Pointer-reactive parallax layers with frequent, probabilistic shooting stars.
    #[default]
    Parallax,
    /// Static layers with one shooting star a minute.
    Ambient,
}

impl Variant {
    /// Whether this variant subscribes to pointer movement.
    pub fn tracks_pointer(self) -> bool {
        matches!(self, Variant::Parallax)
    }

    /// Lowercase name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Parallax => "parallax",
            Variant::Ambient => "ambient",
        }
    }

    /// Timing preset for this variant.
    pub fn preset(self) -> StarfieldConfig {
        match self {
            Variant::Parallax => StarfieldConfig {
                variant: self,
                initial_delay_ms: 1_000,
                interval_ms: 2_000,
                tick_anchor: TickAnchor::Mount,
                spawn_probability: 0.3,
                display_ms: DISPLAY_MS,
            },
            Variant::Ambient => StarfieldConfig {
                variant: self,
                initial_delay_ms: 5_000,
                interval_ms: 60_000,
                tick_anchor: TickAnchor::FirstStar,
                spawn_probability: 1.0,
                display_ms: DISPLAY_MS,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parallax" | "a" => Ok(Variant::Parallax),
            "ambient" | "b" => Ok(Variant::Ambient),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

/// Shooting-star schedule of one starfield instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarfieldConfig {
    pub variant: Variant,
    /// Delay before the first shooting star. That star is always spawned.
    pub initial_delay_ms: u32,
    /// Period of the spawn tick.
    pub interval_ms: u32,
    pub tick_anchor: TickAnchor,
    /// Chance that a spawn tick actually produces a star.
    pub spawn_probability: f64,
    /// Lifetime of each star in the live collection.
    pub display_ms: u32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Variant::default().preset()
    }
}

/// Partial config as accepted from JSON. Absent fields keep the preset value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverrides {
    variant: Option<Variant>,
    initial_delay_ms: Option<u32>,
    interval_ms: Option<u32>,
    tick_anchor: Option<TickAnchor>,
    spawn_probability: Option<f64>,
    display_ms: Option<u32>,
}

impl StarfieldConfig {
    /// Parse JSON overrides on top of the default preset.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::default().apply_json(json)
    }

    /// Apply JSON overrides to this config.
    ///
    /// A `variant` field that differs from `self.variant` swaps in that
    /// variant's preset before the remaining fields are applied.
    pub fn apply_json(self, json: &str) -> Result<Self> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;

        let mut config = match overrides.variant {
            Some(variant) if variant != self.variant => variant.preset(),
            _ => self,
        };
        if let Some(ms) = overrides.initial_delay_ms {
            config.initial_delay_ms = ms;
        }
        if let Some(ms) = overrides.interval_ms {
            config.interval_ms = ms;
        }
        if let Some(anchor) = overrides.tick_anchor {
            config.tick_anchor = anchor;
        }
        if let Some(p) = overrides.spawn_probability {
            config.spawn_probability = p;
        }
        if let Some(ms) = overrides.display_ms {
            config.display_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values against the ranges the scheduler relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.spawn_probability.is_finite() || !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(Error::InvalidConfig(format!(
                "spawn_probability must be within [0, 1], got {}",
                self.spawn_probability
            )));
        }
        if self.interval_ms == 0 {
            return Err(Error::InvalidConfig("interval_ms must be greater than 0".to_string()));
        }
        if self.display_ms == 0 {
            return Err(Error::InvalidConfig("display_ms must be greater than 0".to_string()));
        }
        Ok(())
    }
}
