//! # Scene
//!
//! The drawing instructions a view layer needs to render a starfield: the
//! nebula pulse, three star layers and the live shooting-star sprites.
//! Colors and animation curves stay in the stylesheet; the scene only carries
//! the per-element parameters.

use crate::layer::{LayerDepth, StarLayer, StarLayers};
use crate::live::LiveCollection;
use crate::pointer::PointerPosition;
use crate::shooting_star::{ShootingStar, ShootingStarId};

/// Class of the element running the looping nebula opacity animation.
pub const NEBULA_CLASS: &str = "nebula";

/// Render parameters of one star layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerView<'a> {
    pub depth: LayerDepth,
    pub box_shadow: &'a str,
    pub dot_size_px: u32,
    pub opacity: f64,
    /// Parallax translation; `None` when the starfield ignores the pointer.
    pub transform: Option<String>,
}

impl<'a> LayerView<'a> {
    pub fn new(layer: &'a StarLayer, pointer: Option<PointerPosition>) -> Self {
        let depth = layer.depth();
        Self {
            depth,
            box_shadow: layer.box_shadow(),
            dot_size_px: depth.dot_size_px(),
            opacity: depth.opacity(),
            transform: pointer.map(|p| p.layer_transform(depth)),
        }
    }

    pub fn class(&self) -> String {
        layer_class(self.depth)
    }

    /// Style of the dot element whose shadows draw the layer.
    pub fn dots_style(&self) -> String {
        dots_style(self.depth, self.box_shadow)
    }
}

/// `star-layer star-layer--{depth}`
pub fn layer_class(depth: LayerDepth) -> String {
    format!("star-layer star-layer--{}", depth.as_str())
}

pub fn dots_style(depth: LayerDepth, box_shadow: &str) -> String {
    let size = depth.dot_size_px();
    format!(
        "width: {size}px; height: {size}px; opacity: {}; box-shadow: {box_shadow};",
        depth.opacity()
    )
}

/// Render parameters of one shooting star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteView {
    pub id: ShootingStarId,
    pub style: String,
}

impl From<&ShootingStar> for SpriteView {
    fn from(star: &ShootingStar) -> Self {
        Self {
            id: star.id,
            style: star.style(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    pub nebula_class: &'static str,
    pub layers: Vec<LayerView<'a>>,
    pub shooting_stars: Vec<SpriteView>,
}

impl<'a> Scene<'a> {
    /// Build the scene for the current frame. Pass `pointer` only for
    /// starfields that react to it.
    pub fn build(
        layers: &'a StarLayers,
        pointer: Option<PointerPosition>,
        live: &LiveCollection,
    ) -> Self {
        Self {
            nebula_class: NEBULA_CLASS,
            layers: layers.iter().map(|layer| LayerView::new(layer, pointer)).collect(),
            shooting_stars: live.iter().map(SpriteView::from).collect(),
        }
    }
}
