//! Shooting-star driver
//!
//! Couples a [`ShootingStarLifecycle`] to browser timers and publishes the
//! live collection after every change. One driver per mounted starfield.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lib_starfield::{
    Phase, ShootingStar, ShootingStarLifecycle, StarfieldConfig, TimerEvent, TimerHandle,
    TimerHost,
};
use rand::rngs::SmallRng;

use crate::services::timers::Dispatch;
use crate::services::BrowserTimers;
use crate::utils::current_viewport;

pub struct ShootingStarDriver {
    lifecycle: ShootingStarLifecycle,
    timers: BrowserTimers,
    rng: SmallRng,
}

impl ShootingStarDriver {
    /// Mount a new lifecycle and arm its initial timers. `publish` receives a
    /// snapshot of the live collection whenever it changes.
    pub fn start(
        config: StarfieldConfig,
        rng: SmallRng,
        publish: impl Fn(Vec<ShootingStar>) + 'static,
    ) -> Rc<RefCell<Self>> {
        let driver = Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            let weak = weak.clone();
            let dispatch: Dispatch = Rc::new(move |handle, event| {
                let Some(driver) = weak.upgrade() else {
                    return;
                };
                let snapshot = driver.borrow_mut().on_timer(handle, event);
                if let Some(stars) = snapshot {
                    publish(stars);
                }
            });

            RefCell::new(Self {
                lifecycle: ShootingStarLifecycle::new(config),
                timers: BrowserTimers::new(dispatch),
                rng,
            })
        });

        {
            let mut this = driver.borrow_mut();
            for request in this.lifecycle.mount() {
                this.timers.schedule(request);
            }
        }

        driver
    }

    /// Handle one fired timer. Returns the new live collection if it changed.
    fn on_timer(&mut self, handle: TimerHandle, event: TimerEvent) -> Option<Vec<ShootingStar>> {
        self.timers.complete(handle);
        if self.lifecycle.phase() != Phase::Mounted {
            return None;
        }

        let before = self.lifecycle.live().len();
        let requests = self.lifecycle.fire(event, current_viewport(), &mut self.rng);
        for request in requests {
            self.timers.schedule(request);
        }

        // Each event adds or removes at most one star.
        let changed = self.lifecycle.live().len() != before;
        changed.then(|| self.lifecycle.live().to_vec())
    }

    /// Stop the lifecycle and cancel every pending timer.
    /// Returns how many timers were cancelled.
    pub fn teardown(&mut self) -> usize {
        self.lifecycle.unmount();
        self.timers.cancel_all()
    }
}
