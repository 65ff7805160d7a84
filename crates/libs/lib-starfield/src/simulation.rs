//! # Simulated Starfield
//!
//! A starfield instance wired to [`VirtualTimers`]: the same lifecycle the
//! browser component runs, with time advanced explicitly. Used by tests and
//! by anything that needs to replay a schedule deterministically.
//!
//! ```rust
//! use lib_starfield::{rng::seeded, SimulatedStarfield, Variant, Viewport};
//!
//! let mut field = SimulatedStarfield::new(Variant::Ambient.preset(), Viewport::FALLBACK, seeded(1));
//! field.mount();
//! field.advance_to(5_000);
//! assert_eq!(field.live().len(), 1);
//! field.advance_to(7_000);
//! assert!(field.live().is_empty());
//! ```

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::StarfieldConfig;
use crate::layer::StarLayers;
use crate::lifecycle::{Phase, ShootingStarLifecycle};
use crate::live::LiveCollection;
use crate::model::StarfieldModel;
use crate::pointer::{PointerPosition, Viewport};
use crate::scene::Scene;
use crate::timers::{TimerHost, VirtualTimers};

#[derive(Debug)]
pub struct SimulatedStarfield<R: Rng = SmallRng> {
    model: StarfieldModel,
    lifecycle: ShootingStarLifecycle,
    timers: VirtualTimers,
    viewport: Viewport,
    rng: R,
}

impl<R: Rng> SimulatedStarfield<R> {
    /// Create the instance and generate its layers. Nothing is scheduled
    /// until [`mount`](Self::mount).
    pub fn new(config: StarfieldConfig, viewport: Viewport, mut rng: R) -> Self {
        let model = StarfieldModel::new(config.variant, &mut rng);
        Self {
            model,
            lifecycle: ShootingStarLifecycle::new(config),
            timers: VirtualTimers::new(),
            viewport,
            rng,
        }
    }

    pub fn mount(&mut self) {
        for request in self.lifecycle.mount() {
            self.timers.schedule(request);
        }
    }

    /// Run every timer due up to and including `now_ms`, in due order.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some((_, event)) = self.timers.pop_due(now_ms) {
            for request in self.lifecycle.fire(event, self.viewport, &mut self.rng) {
                self.timers.schedule(request);
            }
        }
        self.timers.advance_to(now_ms);
    }

    pub fn advance_by(&mut self, ms: u64) {
        let target = self.timers.now_ms() + ms;
        self.advance_to(target);
    }

    /// Tear down: stop the lifecycle and cancel every outstanding timer.
    /// Returns the number of timers cancelled.
    pub fn unmount(&mut self) -> usize {
        self.lifecycle.unmount();
        let cancelled = self.timers.cancel_all();
        log::debug!("Cancelled {cancelled} pending timers on unmount");
        cancelled
    }

    /// Change the viewport used for future spawns and pointer moves.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> bool {
        self.model.on_pointer_move(client_x, client_y, self.viewport)
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn live(&self) -> &LiveCollection {
        self.lifecycle.live()
    }

    pub fn layers(&self) -> &StarLayers {
        self.model.layers()
    }

    pub fn pointer(&self) -> PointerPosition {
        self.model.pointer()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn scene(&self) -> Scene<'_> {
        self.model.scene(self.lifecycle.live())
    }
}
