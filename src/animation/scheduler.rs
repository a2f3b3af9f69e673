use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::foundation::core::TimeMs;

/// Handle to a periodic timer owned by a [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct TimerId(pub u64);

/// A source of periodic frame callbacks.
///
/// Implementations deliver ticks for a started timer until it is cancelled. Delivery is the
/// caller's loop: the scheduler only says which timer is due, the owner of the animation state
/// reacts to it. Cancelling an unknown or already-cancelled id is a no-op.
pub trait Scheduler {
    /// Start a timer that fires every `interval_ms`, first firing one interval from now.
    fn start_repeating(&mut self, interval_ms: u64) -> TimerId;
    /// Stop a timer; no further ticks are delivered for `id`.
    fn cancel(&mut self, id: TimerId);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn start_repeating(&mut self, interval_ms: u64) -> TimerId {
        (**self).start_repeating(interval_ms)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id);
    }
}

/// One delivered tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Clock time the tick was due.
    pub at: TimeMs,
    /// Timer that fired.
    pub timer: TimerId,
}

#[derive(Clone, Copy, Debug)]
struct VirtualTimer {
    interval_ms: u64,
    next_due: TimeMs,
}

#[derive(Debug, Default)]
struct VirtualClock {
    now: TimeMs,
    next_id: u64,
    timers: BTreeMap<TimerId, VirtualTimer>,
    starts: usize,
    cancels: usize,
}

/// Deterministic, manually advanced clock.
///
/// Cloning yields another handle to the same clock, so a caller can keep one handle to drive
/// time and inspect counters while an animator owns another.
#[derive(Clone, Debug, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualScheduler {
    /// A clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    pub fn now(&self) -> TimeMs {
        self.clock.borrow().now
    }

    /// Number of timers currently running.
    pub fn live_timers(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Whether `id` is still running.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.clock.borrow().timers.contains_key(&id)
    }

    /// Timers started so far.
    pub fn starts(&self) -> usize {
        self.clock.borrow().starts
    }

    /// Effective cancellations so far (cancelling a dead id does not count).
    pub fn cancels(&self) -> usize {
        self.clock.borrow().cancels
    }

    /// Pop the earliest tick due at or before `deadline`, moving the clock to it.
    ///
    /// Ties are broken by timer id. The fired timer is rescheduled one interval later, so a
    /// caller that cancels it before the next pop never sees it again.
    pub fn pop_due(&self, deadline: TimeMs) -> Option<Tick> {
        let mut clock = self.clock.borrow_mut();
        let (id, due) = clock
            .timers
            .iter()
            .filter(|(_, t)| t.next_due <= deadline)
            .min_by_key(|(id, t)| (t.next_due, **id))
            .map(|(id, t)| (*id, t.next_due))?;

        clock.now = clock.now.max(due);
        if let Some(t) = clock.timers.get_mut(&id) {
            t.next_due = due.saturating_add(t.interval_ms);
        }
        Some(Tick { at: due, timer: id })
    }

    /// Move the clock forward to `t` without delivering anything.
    pub fn advance_to(&self, t: TimeMs) {
        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.max(t);
    }
}

impl Scheduler for VirtualScheduler {
    fn start_repeating(&mut self, interval_ms: u64) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId(clock.next_id);
        clock.next_id += 1;
        clock.starts += 1;
        let interval_ms = interval_ms.max(1);
        let next_due = clock.now.saturating_add(interval_ms);
        clock.timers.insert(
            id,
            VirtualTimer {
                interval_ms,
                next_due,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let mut clock = self.clock.borrow_mut();
        if clock.timers.remove(&id).is_some() {
            clock.cancels += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
