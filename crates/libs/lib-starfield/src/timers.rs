//! # Timer Hosts
//!
//! A [`TimerHost`] turns [`TimerRequest`]s into running timers and owns the
//! handle of every timer it armed, so tearing a starfield down is a single
//! [`cancel_all`](TimerHost::cancel_all).
//!
//! [`VirtualTimers`] is the deterministic host: time only moves when the
//! caller asks it to, which makes the lifecycle testable to the millisecond.
//! The browser host lives in the web crate and wraps `gloo-timers`.

use std::collections::{BTreeMap, HashMap};

use crate::lifecycle::{TimerEvent, TimerRequest};

/// Cancellation handle of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

pub trait TimerHost {
    /// Arm a timer and return the handle that cancels it.
    fn schedule(&mut self, request: TimerRequest) -> TimerHandle;

    /// Cancel one timer. Returns `false` if it already fired (one-shot) or
    /// was cancelled before.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Cancel every outstanding timer and return how many there were.
    fn cancel_all(&mut self) -> usize;

    /// Number of timers still armed.
    fn pending(&self) -> usize;
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    event: TimerEvent,
    period_ms: Option<u32>,
}

/// Deterministic timer queue driven by explicit calls to
/// [`pop_due`](VirtualTimers::pop_due) and [`advance_to`](VirtualTimers::advance_to).
///
/// Timers due at the same instant fire in the order they were armed.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now_ms: u64,
    next_handle: u64,
    queue: BTreeMap<(u64, TimerHandle), Armed>,
    due: HashMap<TimerHandle, u64>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Due time of the earliest armed timer.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Fire the earliest timer due at or before `until_ms`, moving the clock
    /// to its due time. Repeating timers are re-armed one period later.
    ///
    /// Callers loop on this while scheduling whatever the fired event asks
    /// for, so timers armed during the loop fire in the same pass when they
    /// fall due before `until_ms`.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerHandle, TimerEvent)> {
        let (&(due_ms, handle), _) = self.queue.iter().next()?;
        if due_ms > until_ms {
            return None;
        }
        let armed = self.queue.remove(&(due_ms, handle))?;
        self.now_ms = self.now_ms.max(due_ms);

        match armed.period_ms {
            Some(period) => {
                let next = due_ms + u64::from(period);
                self.queue.insert((next, handle), armed);
                self.due.insert(handle, next);
            }
            None => {
                self.due.remove(&handle);
            }
        }
        Some((handle, armed.event))
    }

    /// Move the clock forward without firing anything. Timers due before
    /// `now_ms` stay queued and fire on the next `pop_due`.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl TimerHost for VirtualTimers {
    fn schedule(&mut self, request: TimerRequest) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let (delay_ms, armed) = match request {
            TimerRequest::Once { after_ms, event } => (
                after_ms,
                Armed {
                    event,
                    period_ms: None,
                },
            ),
            // A zero period would re-fire forever at the same instant.
            TimerRequest::Every { period_ms, event } => (
                period_ms.max(1),
                Armed {
                    event,
                    period_ms: Some(period_ms.max(1)),
                },
            ),
        };
        let due_ms = self.now_ms + u64::from(delay_ms);
        self.queue.insert((due_ms, handle), armed);
        self.due.insert(handle, due_ms);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due.remove(&handle) {
            Some(due_ms) => self.queue.remove(&(due_ms, handle)).is_some(),
            None => false,
        }
    }

    fn cancel_all(&mut self) -> usize {
        let cancelled = self.queue.len();
        self.queue.clear();
        self.due.clear();
        cancelled
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
