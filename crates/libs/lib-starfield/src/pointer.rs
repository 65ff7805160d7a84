//! # Pointer Parallax
//!
//! Maps raw pointer coordinates to a normalized offset and the normalized
//! offset to a per-layer translation.

use crate::layer::LayerDepth;

/// Pixel dimensions of the viewport at the moment they were sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Used when the host environment cannot report its size.
    pub const FALLBACK: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Pointer offset from the viewport center, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const CENTER: PointerPosition = PointerPosition { x: 0.0, y: 0.0 };

    /// Normalize client coordinates against the viewport.
    ///
    /// Coordinates outside the viewport clamp to the edge; a zero-sized
    /// viewport yields [`PointerPosition::CENTER`].
    pub fn from_client(client_x: f64, client_y: f64, viewport: Viewport) -> Self {
        if viewport.is_degenerate() {
            return Self::CENTER;
        }
        Self {
            x: (client_x / viewport.width * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (client_y / viewport.height * 2.0 - 1.0).clamp(-1.0, 1.0),
        }
    }

    /// Translation of a layer in pixels: `pointer * -factor`, so layers move
    /// against the pointer and nearer layers move further.
    pub fn layer_offset(self, depth: LayerDepth) -> (f64, f64) {
        let factor = depth.parallax_factor();
        (-(self.x * factor), -(self.y * factor))
    }

    /// CSS `transform` value for a layer.
    pub fn layer_transform(self, depth: LayerDepth) -> String {
        let (dx, dy) = self.layer_offset(depth);
        format!("translate3d({dx:.2}px, {dy:.2}px, 0)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_from_client_center_and_corners() {
        assert_eq!(
            PointerPosition::from_client(400.0, 300.0, VIEWPORT),
            PointerPosition::CENTER
        );
        assert_eq!(
            PointerPosition::from_client(0.0, 0.0, VIEWPORT),
            PointerPosition { x: -1.0, y: -1.0 }
        );
        assert_eq!(
            PointerPosition::from_client(800.0, 600.0, VIEWPORT),
            PointerPosition { x: 1.0, y: 1.0 }
        );
    }

    #[test]
    fn test_from_client_clamps_outside_viewport() {
        let pos = PointerPosition::from_client(-50.0, 10_000.0, VIEWPORT);
        assert_eq!(pos, PointerPosition { x: -1.0, y: 1.0 });
    }

    #[test]
    fn test_from_client_degenerate_viewport() {
        let pos = PointerPosition::from_client(10.0, 10.0, Viewport::new(0.0, 600.0));
        assert_eq!(pos, PointerPosition::CENTER);
    }

    #[test]
    fn test_layer_offset_inverts_and_scales() {
        let pos = PointerPosition { x: 0.5, y: -1.0 };

        assert_eq!(pos.layer_offset(LayerDepth::Far), (-5.0, 10.0));
        assert_eq!(pos.layer_offset(LayerDepth::Mid), (-10.0, 20.0));
        assert_eq!(pos.layer_offset(LayerDepth::Near), (-20.0, 40.0));
    }

    #[test]
    fn test_layer_transform_format() {
        let pos = PointerPosition { x: 1.0, y: 0.25 };
        assert_eq!(
            pos.layer_transform(LayerDepth::Near),
            "translate3d(-40.00px, -10.00px, 0)"
        );
    }
}
