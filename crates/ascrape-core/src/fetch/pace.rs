//! Minimum spacing between consecutive fetches of one fetcher.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Tracks when the previous fetch started and sleeps so that the next one
/// starts at least `delay` later. The first call never waits.
#[derive(Debug)]
pub(crate) struct Pacer {
    delay: Duration,
    last_start: Cell<Option<Instant>>,
}

impl Pacer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_start: Cell::new(None),
        }
    }

    /// Time still to wait before a fetch may start at `now`.
    fn remaining(&self, now: Instant) -> Duration {
        match self.last_start.get() {
            Some(prev) => self.delay.saturating_sub(now.saturating_duration_since(prev)),
            None => Duration::ZERO,
        }
    }

    /// Block until the next fetch may start, then record its start time.
    pub(crate) fn wait(&self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            tracing::debug!("pacing: sleeping {:?} before next fetch", wait);
            std::thread::sleep(wait);
        }
        self.last_start.set(Some(Instant::now()));
    }
}
