// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use crate::cancel::CancelToken;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A clock that provides the current time and blocking waits
pub trait Clock: Clone + Send + Sync {
    /// Monotonic time, used for elapsed-time reporting
    fn now(&self) -> Instant;

    /// Wall-clock time, used to stamp readings
    fn wall(&self) -> DateTime<Utc>;

    /// Block for `duration` unless `cancel` fires first.
    ///
    /// Returns `false` when the wait was cut short by cancellation.
    fn sleep(&self, duration: Duration, cancel: &CancelToken) -> bool;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration, cancel: &CancelToken) -> bool {
        cancel.wait_timeout(duration)
    }
}

/// Fake clock for testing with controllable time.
///
/// `sleep` never blocks: it advances virtual time and records the requested
/// duration so tests can assert on the exact wait schedule.
#[derive(Clone)]
pub struct FakeClock {
    state: Arc<Mutex<FakeClockState>>,
}

struct FakeClockState {
    origin: Instant,
    origin_wall: DateTime<Utc>,
    current: Instant,
    sleeps: Vec<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            state: Arc::new(Mutex::new(FakeClockState {
                origin: now,
                origin_wall: Utc::now(),
                current: now,
                sleeps: Vec::new(),
            })),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current += duration;
    }

    /// Every duration passed to `sleep`, in call order
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .sleeps
            .clone()
    }

    /// Total virtual time elapsed since the clock was created
    pub fn elapsed(&self) -> Duration {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current.duration_since(state.origin)
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).current
    }

    fn wall(&self) -> DateTime<Utc> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let elapsed = state.current.duration_since(state.origin);
        state.origin_wall + chrono::Duration::from_std(elapsed).unwrap_or_default()
    }

    fn sleep(&self, duration: Duration, cancel: &CancelToken) -> bool {
        if cancel.is_cancelled() {
            return false;
        }
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.sleeps.push(duration);
        state.current += duration;
        true
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
