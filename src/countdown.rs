use std::time::{Duration, Instant};

use crate::board::TrapId;

/// A single pending trap auto-trigger. Arming a new trap replaces the old one.
#[derive(Clone, Debug)]
pub struct TrapCountdown {
    duration: Duration,
    pending: Option<(TrapId, Instant)>,
}

impl TrapCountdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn arm(&mut self, trap: TrapId, now: Instant) {
        self.pending = Some((trap, now + self.duration));
    }

    pub fn pending(&self) -> Option<TrapId> {
        self.pending.map(|(trap, _)| trap)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancels only when `trap` is the one counting down.
    pub fn cancel_for(&mut self, trap: TrapId) -> bool {
        if self.pending() == Some(trap) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Returns the trap whose deadline has passed and disarms the countdown.
    pub fn poll(&mut self, now: Instant) -> Option<TrapId> {
        match self.pending {
            Some((trap, deadline)) if now >= deadline => {
                self.pending = None;
                Some(trap)
            }
            _ => None,
        }
    }
}
