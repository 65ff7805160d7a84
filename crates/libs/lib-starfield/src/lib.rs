//! # Starfield Library
//!
//! Platform-independent core of the decorative starfield background and the
//! tooltip overlay. The web crate renders what this crate computes.
//!
//! ## Structure
//!
//! - **[`layer`]**: three static depth planes of stars, serialized to `box-shadow`
//! - **[`pointer`]**: viewport and normalized pointer offset, per-layer parallax
//! - **[`shooting_star`]**: shooting-star sprites and their ids
//! - **[`live`]**: ordered collection of unexpired shooting stars
//! - **[`lifecycle`]**: spawn/expire state machine, driven by timer events
//! - **[`timers`]**: timer host abstraction and a deterministic virtual-time host
//! - **[`simulation`]**: a full starfield instance on virtual time
//! - **[`scene`]**: drawing instructions handed to the view layer
//! - **[`tooltip`]**: tooltip visibility and box styling
//! - **[`config`]**: variant presets and JSON overrides
//!
//! ## Timing
//!
//! | Variant | first star | spawn tick | spawn chance | star lifetime |
//! |---------|------------|------------|--------------|---------------|
//! | Parallax | 1 s | every 2 s | 30% | 2 s |
//! | Ambient | 5 s | every 60 s | 100% | 2 s |

pub mod config;
pub mod error;
pub mod layer;
pub mod lifecycle;
pub mod live;
pub mod model;
pub mod pointer;
pub mod rng;
pub mod scene;
pub mod shooting_star;
pub mod simulation;
pub mod timers;
pub mod tooltip;

pub use config::{StarfieldConfig, TickAnchor, Variant, DISPLAY_MS};
pub use error::{Error, Result};
pub use layer::{LayerDepth, StarLayer, StarLayers, StarPoint};
pub use lifecycle::{Phase, ShootingStarLifecycle, TimerEvent, TimerRequest};
pub use live::LiveCollection;
pub use model::StarfieldModel;
pub use pointer::{PointerPosition, Viewport};
pub use scene::{LayerView, Scene, SpriteView};
pub use shooting_star::{ShootingStar, ShootingStarId};
pub use simulation::SimulatedStarfield;
pub use timers::{TimerHandle, TimerHost, VirtualTimers};
pub use tooltip::TooltipBox;
