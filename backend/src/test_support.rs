//! Test doubles shared by unit tests and the integration suites in `tests/`.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Start the clock at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward by whole seconds. Negative values move it back.
    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    /// Jump to an absolute instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock_clock() = now;
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}
