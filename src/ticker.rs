use std::time::{Duration, Instant};

/// Fixed-period tick source for a poll-driven loop.
///
/// The loop waits on input for at most [`Ticker::timeout`], then asks
/// [`Ticker::due`] whether a tick should run. Once cancelled it never fires
/// again.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Instant,
    cancelled: bool,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last: now,
            cancelled: false,
        }
    }

    /// Time left until the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        if self.cancelled {
            return self.period;
        }
        self.period
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    pub fn due(&self, now: Instant) -> bool {
        !self.cancelled && now.saturating_duration_since(self.last) >= self.period
    }

    /// Record that a tick ran at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last = now;
    }

    /// Restart the period from `now`, e.g. after a reset.
    pub fn rearm(&mut self, now: Instant) {
        self.cancelled = false;
        self.last = now;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
