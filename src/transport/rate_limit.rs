//! Fixed-interval request pacing.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// Spaces requests at least `1s / rate` apart across all callers.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Returns `None` for a zero rate, which means unlimited.
    pub fn per_second(rate: u32) -> Option<Self> {
        if rate == 0 {
            return None;
        }
        Some(Self {
            interval: Duration::from_secs(1) / rate,
            next_slot: Mutex::new(None),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the caller may issue its request.
    pub fn take(&self) {
        let wait = self.reserve(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }

    fn reserve(&self, now: Instant) -> Duration {
        let mut next_slot = self
            .next_slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let slot = match *next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };
        *next_slot = Some(slot + self.interval);
        slot - now
    }
}
