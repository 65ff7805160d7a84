//! Browser Timer Host
//!
//! [`TimerHost`] on top of `gloo-timers`. Every armed timer is owned by the
//! host; dropping a gloo `Timeout`/`Interval` clears the browser timer, so
//! removing a handle from the map is the cancellation. Dropping the host
//! cancels everything it still holds.

use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use lib_starfield::{TimerEvent, TimerHandle, TimerHost, TimerRequest};

/// Called from the browser event loop whenever a timer fires.
pub type Dispatch = Rc<dyn Fn(TimerHandle, TimerEvent)>;

enum BrowserTimer {
    Once(Timeout),
    Every(Interval),
}

pub struct BrowserTimers {
    next_handle: u64,
    armed: HashMap<TimerHandle, BrowserTimer>,
    dispatch: Dispatch,
}

impl BrowserTimers {
    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            next_handle: 0,
            armed: HashMap::new(),
            dispatch,
        }
    }

    /// Release a one-shot timer that has just fired. Repeating timers stay
    /// armed until cancelled.
    pub fn complete(&mut self, handle: TimerHandle) {
        if matches!(self.armed.get(&handle), Some(BrowserTimer::Once(_))) {
            self.armed.remove(&handle);
        }
    }
}

impl TimerHost for BrowserTimers {
    fn schedule(&mut self, request: TimerRequest) -> TimerHandle {
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;

        let dispatch = Rc::clone(&self.dispatch);
        let timer = match request {
            TimerRequest::Once { after_ms, event } => {
                BrowserTimer::Once(Timeout::new(after_ms, move || dispatch(handle, event)))
            }
            TimerRequest::Every { period_ms, event } => {
                BrowserTimer::Every(Interval::new(period_ms, move || dispatch(handle, event)))
            }
        };
        self.armed.insert(handle, timer);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.armed.remove(&handle).is_some()
    }

    fn cancel_all(&mut self) -> usize {
        let cancelled = self.armed.len();
        // Each Timeout/Interval clears its browser timer on drop.
        self.armed.clear();
        cancelled
    }

    fn pending(&self) -> usize {
        self.armed.len()
    }
}
