//! Per-instance runtime state

pub mod shooting_stars;

pub use shooting_stars::ShootingStarDriver;
