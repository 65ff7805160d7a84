//! # Star Layers
//!
//! Three static depth planes of background stars. Each layer is generated
//! once when a starfield mounts and serialized into a CSS `box-shadow` list,
//! so the whole plane renders as a single element whose shadows are the dots.
//!
//! | depth | points | layer opacity | parallax factor | dot size |
//! |-------|--------|---------------|-----------------|----------|
//! | far   | 50     | 0.4           | 10              | 1px      |
//! | mid   | 100    | 0.6           | 20              | 2px      |
//! | near  | 150    | 0.8           | 40              | 2px      |

use std::fmt::Write as _;

use rand::Rng;

use crate::rng::uniform;

/// Upper bound (exclusive) of a single point's opacity.
pub const MAX_POINT_OPACITY: f64 = 0.8;

/// Depth plane of a star layer, from furthest to nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerDepth {
    Far,
    Mid,
    Near,
}

impl LayerDepth {
    /// All depths in back-to-front draw order.
    pub const ALL: [LayerDepth; 3] = [LayerDepth::Far, LayerDepth::Mid, LayerDepth::Near];

    /// Number of points generated for this layer.
    pub fn count(self) -> usize {
        match self {
            LayerDepth::Far => 50,
            LayerDepth::Mid => 100,
            LayerDepth::Near => 150,
        }
    }

    /// Opacity applied to the layer element as a whole.
    pub fn opacity(self) -> f64 {
        match self {
            LayerDepth::Far => 0.4,
            LayerDepth::Mid => 0.6,
            LayerDepth::Near => 0.8,
        }
    }

    /// Pixels of translation per unit of normalized pointer offset.
    /// Nearer layers move more.
    pub fn parallax_factor(self) -> f64 {
        match self {
            LayerDepth::Far => 10.0,
            LayerDepth::Mid => 20.0,
            LayerDepth::Near => 40.0,
        }
    }

    /// Rendered size of every dot in this layer.
    pub fn dot_size_px(self) -> u32 {
        match self {
            LayerDepth::Far => 1,
            LayerDepth::Mid | LayerDepth::Near => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayerDepth::Far => "far",
            LayerDepth::Mid => "mid",
            LayerDepth::Near => "near",
        }
    }
}

/// One background star, positioned in viewport percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPoint {
    /// Horizontal position in `[0, 100)` percent of the viewport width.
    pub x: f64,
    /// Vertical position in `[0, 100)` percent of the viewport height.
    pub y: f64,
    /// Opacity in `[0, 0.8)`.
    pub opacity: f64,
}

impl StarPoint {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: uniform(rng, 0.0, 100.0),
            y: uniform(rng, 0.0, 100.0),
            opacity: uniform(rng, 0.0, MAX_POINT_OPACITY),
        }
    }
}

/// An immutable depth plane of stars together with its drawing instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer {
    depth: LayerDepth,
    points: Vec<StarPoint>,
    box_shadow: String,
}

impl StarLayer {
    /// Generate `depth.count()` random points and serialize them.
    pub fn generate<R: Rng + ?Sized>(depth: LayerDepth, rng: &mut R) -> Self {
        let points: Vec<StarPoint> = (0..depth.count()).map(|_| StarPoint::random(&mut *rng)).collect();
        let box_shadow = box_shadow(&points);
        Self {
            depth,
            points,
            box_shadow,
        }
    }

    pub fn depth(&self) -> LayerDepth {
        self.depth
    }

    pub fn points(&self) -> &[StarPoint] {
        &self.points
    }

    /// CSS `box-shadow` value drawing every point of the layer.
    pub fn box_shadow(&self) -> &str {
        &self.box_shadow
    }
}

/// Serialize points into a `box-shadow` list, one shadow per point.
fn box_shadow(points: &[StarPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 48);
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{:.3}vw {:.3}vh 0 0 rgba(255, 255, 255, {:.3})",
            truncate_milli(point.x),
            truncate_milli(point.y),
            truncate_milli(point.opacity)
        );
    }
    out
}

/// Drop everything past the third decimal. Rounding would let a point just
/// below an exclusive bound print as the bound itself.
fn truncate_milli(value: f64) -> f64 {
    (value * 1000.0).floor() / 1000.0
}

/// The three layers of a starfield, far to near.
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayers {
    layers: [StarLayer; 3],
}

impl StarLayers {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let layers = LayerDepth::ALL.map(|depth| StarLayer::generate(depth, &mut *rng));
        log::debug!(
            "Generated star layers: far={}, mid={}, near={}",
            layers[0].points().len(),
            layers[1].points().len(),
            layers[2].points().len()
        );
        Self { layers }
    }

    pub fn get(&self, depth: LayerDepth) -> &StarLayer {
        match depth {
            LayerDepth::Far => &self.layers[0],
            LayerDepth::Mid => &self.layers[1],
            LayerDepth::Near => &self.layers[2],
        }
    }

    /// Layers in back-to-front draw order.
    pub fn iter(&self) -> impl Iterator<Item = &StarLayer> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn test_layer_counts() {
        let layers = StarLayers::generate(&mut seeded(1));

        assert_eq!(layers.get(LayerDepth::Far).points().len(), 50);
        assert_eq!(layers.get(LayerDepth::Mid).points().len(), 100);
        assert_eq!(layers.get(LayerDepth::Near).points().len(), 150);
    }

    #[test]
    fn test_points_within_bounds() {
        for seed in 0..20 {
            let layers = StarLayers::generate(&mut seeded(seed));
            for layer in layers.iter() {
                for point in layer.points() {
                    assert!((0.0..100.0).contains(&point.x), "x out of range: {}", point.x);
                    assert!((0.0..100.0).contains(&point.y), "y out of range: {}", point.y);
                    assert!(
                        (0.0..MAX_POINT_OPACITY).contains(&point.opacity),
                        "opacity out of range: {}",
                        point.opacity
                    );
                }
            }
        }
    }

    #[test]
    fn test_iter_is_back_to_front() {
        let layers = StarLayers::generate(&mut seeded(2));
        let depths: Vec<LayerDepth> = layers.iter().map(StarLayer::depth).collect();
        assert_eq!(depths, LayerDepth::ALL);
    }

    #[test]
    fn test_parallax_factor_grows_with_closeness() {
        assert!(LayerDepth::Far.parallax_factor() < LayerDepth::Mid.parallax_factor());
        assert!(LayerDepth::Mid.parallax_factor() < LayerDepth::Near.parallax_factor());
        assert_eq!(LayerDepth::Near.parallax_factor(), 40.0);
    }

    #[test]
    fn test_box_shadow_has_one_entry_per_point() {
        let layer = StarLayer::generate(LayerDepth::Mid, &mut seeded(3));
        let entries: Vec<&str> = layer.box_shadow().split("), ").collect();

        assert_eq!(entries.len(), layer.points().len());
        assert!(layer.box_shadow().ends_with(')'));
    }

    #[test]
    fn test_box_shadow_format() {
        let points = [StarPoint {
            x: 12.5,
            y: 50.0,
            opacity: 0.25,
        }];
        assert_eq!(
            box_shadow(&points),
            "12.500vw 50.000vh 0 0 rgba(255, 255, 255, 0.250)"
        );
    }

    #[test]
    fn test_box_shadow_never_prints_exclusive_bounds() {
        let points = [StarPoint {
            x: 99.9996,
            y: 0.0004,
            opacity: 0.79996,
        }];
        assert_eq!(
            box_shadow(&points),
            "99.999vw 0.000vh 0 0 rgba(255, 255, 255, 0.799)"
        );
    }

    #[test]
    fn test_layer_styles() {
        let opacities = LayerDepth::ALL.map(LayerDepth::opacity);
        let sizes = LayerDepth::ALL.map(LayerDepth::dot_size_px);

        assert_eq!(opacities, [0.4, 0.6, 0.8]);
        assert_eq!(sizes, [1, 2, 2]);
    }

    #[test]
    fn test_same_seed_same_layers() {
        let a = StarLayers::generate(&mut seeded(42));
        let b = StarLayers::generate(&mut seeded(42));
        assert_eq!(a, b);
    }
}
