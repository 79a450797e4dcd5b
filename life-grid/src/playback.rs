//! Repeating tick that drives generations while playing.
//!
//! Everything runs on the event loop thread, so the handle shares its flag
//! through `Rc` rather than any kind of lock.

use std::cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type ActiveFlag = Rc<cell::Cell<bool>>;

/// Returned by [`Playback::play`]. Cancelling it, or dropping it, stops all
/// future ticks of that play session.
#[derive(Debug)]
pub struct PlayHandle {
    active: ActiveFlag,
}

impl PlayHandle {
    pub fn cancel(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for PlayHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug)]
struct Schedule {
    active: ActiveFlag,
    next_tick: Instant,
}

#[derive(Debug)]
pub struct Playback {
    interval: Duration,
    schedule: Option<Schedule>,
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero());
        Self {
            interval,
            schedule: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts ticking, first tick one interval after `now`. Any earlier
    /// play session is cancelled.
    pub fn play(&mut self, now: Instant) -> PlayHandle {
        if let Some(old) = self.schedule.take() {
            old.active.set(false);
        }
        let active = Rc::new(cell::Cell::new(true));
        self.schedule = Some(Schedule {
            active: Rc::clone(&active),
            next_tick: now + self.interval,
        });
        PlayHandle { active }
    }

    pub fn is_playing(&self) -> bool {
        self.schedule
            .as_ref()
            .is_some_and(|schedule| schedule.active.get())
    }

    /// When the event loop should wake up next, if playing.
    pub fn next_tick(&self) -> Option<Instant> {
        self.schedule
            .as_ref()
            .filter(|schedule| schedule.active.get())
            .map(|schedule| schedule.next_tick)
    }

    /// Returns true if a tick is due at `now`. Missed ticks collapse into
    /// one; the next deadline is moved past `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if !schedule.active.get() {
            self.schedule = None;
            return false;
        }
        if now < schedule.next_tick {
            return false;
        }
        while schedule.next_tick <= now {
            schedule.next_tick += self.interval;
        }
        true
    }
}
