//! Injectable time source
//!
//! This module provides a small clock abstraction so that everything in the
//! catalog that depends on "now" (release recency, creation timestamps,
//! streaming windows) can be driven deterministically in tests instead of
//! reading wall-clock time directly.

use chrono::{DateTime, Duration, Utc};

/// Trait for time sources used by the catalog
///
/// Implementors provide the current instant. The library holds a clock as a
/// trait object, so production code uses [`SystemClock`] while tests can
/// substitute a [`FixedClock`] pinned to a known point in time.
pub trait Clock {
    /// Returns the current instant according to this clock
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system's wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock pinned to a fixed instant
///
/// Time only moves when explicitly advanced, making recency-based
/// predicates reproducible in tests.
#[derive(Debug, Clone)]
pub struct FixedClock {
    current: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a fixed clock reporting the given instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { current: now }
    }

    /// Advances the clock by the given duration
    pub fn advance(&mut self, duration: Duration) {
        self.current += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.current
    }
}
