//! Wall-clock source shared by services.
//!
//! # Responsibility
//! - Provide the single notion of "now" and "today" used by every service.
//! - Allow deterministic time in tests and demo runs.
//!
//! # Invariants
//! - Timestamps are local wall time without timezone information.
//! - `today()` is always the date part of `now()`.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Mutex;

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local wall time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Midnight at the start of the current local date.
    fn start_of_today(&self) -> NaiveDateTime {
        self.today().and_time(NaiveTime::MIN)
    }
}

/// Clock backed by the operating system local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually controlled clock for tests and reproducible demo output.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward (or backward for negative durations).
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += by;
    }

    /// Pins the clock to an explicit instant.
    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
