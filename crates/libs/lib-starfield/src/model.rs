//! Per-instance state of a starfield that is not tied to timers: the static
//! layers and the last pointer position.

use rand::Rng;

use crate::config::Variant;
use crate::layer::{LayerDepth, StarLayers};
use crate::live::LiveCollection;
use crate::pointer::{PointerPosition, Viewport};
use crate::scene::{LayerView, Scene};

#[derive(Debug)]
pub struct StarfieldModel {
    variant: Variant,
    layers: StarLayers,
    pointer: PointerPosition,
}

impl StarfieldModel {
    /// Generate the layers. They are never regenerated for the lifetime of
    /// the model; pointer updates only touch `pointer`.
    pub fn new<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Self {
        Self {
            variant,
            layers: StarLayers::generate(rng),
            pointer: PointerPosition::CENTER,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn layers(&self) -> &StarLayers {
        &self.layers
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Record a pointer move. Returns `false` for variants that ignore the
    /// pointer.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, viewport: Viewport) -> bool {
        if !self.variant.tracks_pointer() {
            return false;
        }
        self.pointer = PointerPosition::from_client(client_x, client_y, viewport);
        true
    }

    /// Render parameters of one layer at the current pointer.
    pub fn layer_view(&self, depth: LayerDepth) -> LayerView<'_> {
        LayerView::new(self.layers.get(depth), self.scene_pointer())
    }

    pub fn scene<'a>(&'a self, live: &LiveCollection) -> Scene<'a> {
        Scene::build(&self.layers, self.scene_pointer(), live)
    }

    fn scene_pointer(&self) -> Option<PointerPosition> {
        self.variant.tracks_pointer().then_some(self.pointer)
    }
}
