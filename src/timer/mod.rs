//! Restartable countdown timers
//!
//! The frontends poll input on a fixed interval, so countdowns are plain
//! deadlines checked from that loop rather than background timer
//! threads. Expiry checks take an explicit `Instant` where determinism
//! matters; the convenience methods use the wall clock.

use std::time::{Duration, Instant};

/// A restartable one-shot countdown.
///
/// Arming sets a deadline `duration` in the future; `fire` reports
/// expiry exactly once per arming and disarms the countdown. The idle
/// timers restart on player activity, the scramble hint timer restarts
/// itself after every firing.
#[derive(Debug, Clone)]
pub struct Countdown {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Countdown {
    /// A disarmed countdown
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm, or push an armed deadline back to a full duration from now
    pub fn start_or_restart(&mut self) {
        self.restart_at(Instant::now());
    }

    pub fn restart_at(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once per arming, when the deadline has passed
    pub fn fire(&mut self) -> bool {
        self.fire_at(Instant::now())
    }

    pub fn fire_at(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until expiry; None when disarmed, zero when overdue
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
