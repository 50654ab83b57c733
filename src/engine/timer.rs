/// Delayed continuations driven by a simulated clock.
///
/// A timer is scheduled with [`Timers::schedule_after`] and fires once the
/// clock, moved forward by [`Timers::advance`], reaches its due time. The
/// owner polls fired timers with [`Timers::take_fired`]. Dropping `Timers`
/// drops every pending timer, so nothing can fire for an entity that no
/// longer exists.
use std::collections::HashSet;
use std::time::Duration;

/// Identifies one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    due: Duration,
}

/// One-shot timers on a simulated clock
#[derive(Debug, Default)]
pub struct Timers {
    /// Time since the clock started
    now: Duration,

    /// Timers that have not reached their due time
    pending: Vec<PendingTimer>,

    /// Timers that fired and have not been taken yet
    fired: HashSet<TimerId>,

    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer that fires `delay` from now
    pub fn schedule_after(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            due: self.now + delay,
        });
        id
    }

    /// Move the clock forward, firing every timer that comes due
    pub fn advance(&mut self, dt: Duration) {
        self.now += dt;

        let now = self.now;
        let fired = &mut self.fired;
        self.pending.retain(|timer| {
            if timer.due <= now {
                fired.insert(timer.id);
                false
            } else {
                true
            }
        });
    }

    /// Consume a fired timer. Returns true at most once per timer.
    pub fn take_fired(&mut self, id: TimerId) -> bool {
        self.fired.remove(&id)
    }

    /// Drop a timer whether it is pending or already fired
    pub fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|timer| timer.id != id);
        self.fired.remove(&id);
    }

    /// Number of timers still waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
