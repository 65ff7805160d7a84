//! # Shooting-Star Lifecycle
//!
//! The scheduling state machine of one starfield instance, independent of
//! how timers are actually run. The lifecycle never owns a timer: it answers
//! every due [`TimerEvent`] with the [`TimerRequest`]s that should follow,
//! and the [`TimerHost`](crate::timers::TimerHost) that drives it turns
//! those into browser or virtual timers and owns their cancellation.
//!
//! ```text
//! mount ──► FirstSpawn (after initial_delay_ms)
//!   │          ├─► spawn star ──► Expire(id) (after display_ms)
//!   │          └─► SpawnTick (every interval_ms)   [TickAnchor::FirstStar]
//!   └─► SpawnTick (every interval_ms)              [TickAnchor::Mount]
//!          └─► roll spawn_probability ──► spawn star ──► Expire(id)
//! ```
//!
//! Per star: `Created → Live → Removed`, where removal happens exactly once,
//! when its `Expire` timer fires.

use rand::Rng;

use crate::config::{StarfieldConfig, TickAnchor};
use crate::live::LiveCollection;
use crate::pointer::Viewport;
use crate::shooting_star::{IdGenerator, ShootingStar, ShootingStarId};

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// The one-shot timer armed on mount. Always spawns.
    FirstSpawn,
    /// The repeating spawn timer.
    SpawnTick,
    /// Removal of one star from the live collection.
    Expire(ShootingStarId),
}

/// A timer the lifecycle wants armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    Once { after_ms: u32, event: TimerEvent },
    Every { period_ms: u32, event: TimerEvent },
}

impl TimerRequest {
    pub fn event(&self) -> TimerEvent {
        match *self {
            TimerRequest::Once { event, .. } | TimerRequest::Every { event, .. } => event,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Mounted,
    Unmounted,
}

#[derive(Debug)]
pub struct ShootingStarLifecycle {
    config: StarfieldConfig,
    live: LiveCollection,
    ids: IdGenerator,
    phase: Phase,
}

impl ShootingStarLifecycle {
    pub fn new(config: StarfieldConfig) -> Self {
        Self {
            config,
            live: LiveCollection::new(),
            ids: IdGenerator::new(),
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn live(&self) -> &LiveCollection {
        &self.live
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Start the schedule. Returns the initial one-shot timer, plus the spawn
    /// tick when it is anchored at mount. Empty if the lifecycle was already
    /// mounted or torn down.
    pub fn mount(&mut self) -> Vec<TimerRequest> {
        if self.phase != Phase::Idle {
            log::debug!("Ignoring mount in phase {:?}", self.phase);
            return Vec::new();
        }
        self.phase = Phase::Mounted;
        log::info!(
            "Starfield mounted: variant={}, first star in {}ms",
            self.config.variant,
            self.config.initial_delay_ms
        );
        let first = TimerRequest::Once {
            after_ms: self.config.initial_delay_ms,
            event: TimerEvent::FirstSpawn,
        };
        match self.config.tick_anchor {
            TickAnchor::Mount => vec![first, self.spawn_tick()],
            TickAnchor::FirstStar => vec![first],
        }
    }

    /// Handle a due timer and return the timers to arm next.
    ///
    /// `viewport` is sampled by the caller at fire time, so spawn bounds
    /// follow the viewport as it is when the star is created. Events that
    /// arrive outside the mounted phase are dropped without touching the
    /// live collection.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        event: TimerEvent,
        viewport: Viewport,
        rng: &mut R,
    ) -> Vec<TimerRequest> {
        if self.phase != Phase::Mounted {
            log::debug!("Dropping {event:?} fired in phase {:?}", self.phase);
            return Vec::new();
        }

        match event {
            TimerEvent::FirstSpawn => {
                let expire = self.spawn(viewport, rng);
                match self.config.tick_anchor {
                    TickAnchor::FirstStar => vec![expire, self.spawn_tick()],
                    TickAnchor::Mount => vec![expire],
                }
            }
            TimerEvent::SpawnTick => {
                // `random` is in [0, 1): probability 1.0 always spawns, 0.0 never does.
                if rng.random::<f64>() < self.config.spawn_probability {
                    vec![self.spawn(viewport, rng)]
                } else {
                    log::trace!("Spawn tick skipped");
                    Vec::new()
                }
            }
            TimerEvent::Expire(id) => {
                if self.live.remove(id) {
                    log::debug!("Shooting star {id} expired, {} live", self.live.len());
                }
                Vec::new()
            }
        }
    }

    /// Stop reacting to timers. The host cancels whatever it still holds.
    pub fn unmount(&mut self) {
        if self.phase == Phase::Mounted {
            log::info!("Starfield unmounted with {} live stars", self.live.len());
        }
        self.phase = Phase::Unmounted;
    }

    fn spawn_tick(&self) -> TimerRequest {
        log::debug!("Arming spawn tick every {}ms", self.config.interval_ms);
        TimerRequest::Every {
            period_ms: self.config.interval_ms,
            event: TimerEvent::SpawnTick,
        }
    }

    fn spawn<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> TimerRequest {
        let star = ShootingStar::spawn(self.ids.next_id(), viewport, rng);
        let id = star.id;
        log::debug!(
            "Spawned shooting star {id} at ({:.0}, {:.0}) speed={:.2}s size={:.2}px",
            star.x,
            star.y,
            star.speed,
            star.size
        );
        self.live.insert(star);
        TimerRequest::Once {
            after_ms: self.config.display_ms,
            event: TimerEvent::Expire(id),
        }
    }
}
