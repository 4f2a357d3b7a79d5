//! Long-press detection
//!
//! Terminals without key-release reporting deliver a held key as a burst
//! of auto-repeat presses. A press is considered held for as long as those
//! repeats keep arriving within `repeat_gap` of each other.

use std::time::{Duration, Instant};

use crate::config::gesture::REPEAT_GAP_MS;

/// Turns press / repeat / release events into a single long-press trigger
#[derive(Debug, Clone)]
pub struct LongPress {
    threshold: Duration,
    repeat_gap: Duration,
    started: Option<Instant>,
    last_seen: Option<Instant>,
    fired: bool,
}

impl LongPress {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            repeat_gap: Duration::from_millis(REPEAT_GAP_MS),
            started: None,
            last_seen: None,
            fired: false,
        }
    }

    pub fn with_repeat_gap(mut self, gap: Duration) -> Self {
        self.repeat_gap = gap;
        self
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn is_pressed(&self) -> bool {
        self.started.is_some()
    }

    /// A key-down or auto-repeat event. Returns true when the press just
    /// crossed the threshold.
    pub fn press(&mut self, now: Instant) -> bool {
        let continuing = self
            .last_seen
            .is_some_and(|last| now.saturating_duration_since(last) <= self.repeat_gap);

        if !continuing {
            self.started = Some(now);
            self.fired = false;
        }
        self.last_seen = Some(now);
        self.check(now)
    }

    /// A key-up event. Returns true if the press reached the threshold
    /// without having fired yet.
    pub fn release(&mut self, now: Instant) -> bool {
        if !self.is_pressed() {
            return false;
        }
        let fired = self.check(now);
        self.cancel();
        fired
    }

    /// Periodic check while idle. Ends a press whose repeats stopped
    /// arriving, otherwise behaves like a repeat without moving `last_seen`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_seen else {
            return false;
        };
        if now.saturating_duration_since(last) > self.repeat_gap {
            self.cancel();
            return false;
        }
        self.check(now)
    }

    pub fn cancel(&mut self) {
        self.started = None;
        self.last_seen = None;
        self.fired = false;
    }

    /// Fraction of the threshold held so far (0.0 when idle, capped at 1.0)
    pub fn progress(&self, now: Instant) -> f64 {
        match self.started {
            Some(start) if !self.threshold.is_zero() => {
                let held = now.saturating_duration_since(start).as_secs_f64();
                (held / self.threshold.as_secs_f64()).min(1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    fn check(&mut self, now: Instant) -> bool {
        let Some(start) = self.started else {
            return false;
        };
        if !self.fired && now.saturating_duration_since(start) >= self.threshold {
            self.fired = true;
            return true;
        }
        false
    }
}
