//! # Shooting Stars
//!
//! Ephemeral sprites spawned in the upper half of the viewport. A star's
//! `angle`, `speed` and `size` drive its CSS animation; its `id` is the key
//! its expiry timer removes it by.

use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::pointer::Viewport;
use crate::rng::uniform;

/// Trajectory angle of every shooting star, in degrees.
pub const ANGLE_DEG: f64 = 45.0;

/// Animation duration in seconds.
pub const SPEED_RANGE: Range<f64> = 2.0..5.0;

/// Rendered size in pixels.
pub const SIZE_RANGE: Range<f64> = 1.0..3.0;

/// Stars spawn within this fraction of the viewport height, from the top.
pub const SPAWN_HEIGHT_FRACTION: f64 = 0.5;

/// Key of a shooting star within one starfield instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShootingStarId(u64);

impl fmt::Display for ShootingStarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "star-{}", self.0)
    }
}

/// Monotonic id source owned by a starfield instance.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ShootingStarId {
        let id = ShootingStarId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub id: ShootingStarId,
    /// Spawn x in pixels, `[0, viewport.width)`.
    pub x: f64,
    /// Spawn y in pixels, `[0, viewport.height * 0.5)`.
    pub y: f64,
    pub angle: f64,
    pub speed: f64,
    pub size: f64,
}

impl ShootingStar {
    /// Randomize a star within `viewport` as it is right now.
    pub fn spawn<R: Rng + ?Sized>(id: ShootingStarId, viewport: Viewport, rng: &mut R) -> Self {
        Self {
            id,
            x: uniform(rng, 0.0, viewport.width.max(0.0)),
            y: uniform(rng, 0.0, viewport.height.max(0.0) * SPAWN_HEIGHT_FRACTION),
            angle: ANGLE_DEG,
            speed: uniform(rng, SPEED_RANGE.start, SPEED_RANGE.end),
            size: uniform(rng, SIZE_RANGE.start, SIZE_RANGE.end),
        }
    }

    /// Inline style for the sprite: position plus the custom properties the
    /// stylesheet animates with.
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}px; top: {:.1}px; --angle: {}deg; --speed: {:.2}s; --size: {:.2}px;",
            self.x, self.y, self.angle, self.speed, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_spawn_within_bounds() {
        let viewport = Viewport::new(1024.0, 768.0);
        let mut rng = seeded(11);
        let mut ids = IdGenerator::new();

        for _ in 0..1_000 {
            let star = ShootingStar::spawn(ids.next_id(), viewport, &mut rng);

            assert!((0.0..1024.0).contains(&star.x), "x = {}", star.x);
            assert!((0.0..384.0).contains(&star.y), "y = {}", star.y);
            assert!(SPEED_RANGE.contains(&star.speed), "speed = {}", star.speed);
            assert!(SIZE_RANGE.contains(&star.size), "size = {}", star.size);
            assert_eq!(star.angle, 45.0);
        }
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert!(a < b && b < c);
        assert_eq!(c.to_string(), "star-2");
        assert_eq!(a.to_string(), "star-0");
    }

    #[test]
    fn test_style_carries_animation_parameters() {
        let star = ShootingStar {
            id: IdGenerator::new().next_id(),
            x: 10.0,
            y: 20.0,
            angle: ANGLE_DEG,
            speed: 3.0,
            size: 2.0,
        };
        assert_eq!(
            star.style(),
            "left: 10.0px; top: 20.0px; --angle: 45deg; --speed: 3.00s; --size: 2.00px;"
        );
    }
}
