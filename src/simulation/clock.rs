//! Time sources
//!
//! Rooms read the current time through the [`Clock`] trait so the vacancy
//! threshold for automatic booking release can be exercised deterministically.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Mutex;
use tracing::debug;

/// Abstraction over the wall clock
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a manual clock starting at the given instant
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { current: Mutex::new(start) }
    }

    /// Create a manual clock starting at the current system time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Advance the clock by a specific duration
    pub fn advance_by(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += duration;
        debug!("Advanced manual clock by {} to {}", duration, *current);
    }

    /// Jump the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
