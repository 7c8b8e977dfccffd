// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation shared between the signal handler and the loops

use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

/// Cancellation flag that can also wake a blocked waiter.
///
/// Clones share the same flag. Loops check [`CancelToken::is_cancelled`]
/// between iterations; [`CancelToken::wait_timeout`] is the blocking wait
/// used by [`crate::SystemClock`] so an interrupt ends a long sleep early.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake every waiter
    pub fn cancel(&self) {
        let (flag, cvar) = &*self.inner;
        let mut cancelled = flag.lock().unwrap_or_else(|e| e.into_inner());
        *cancelled = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Block for up to `duration`.
    ///
    /// Returns `true` if the full duration elapsed, `false` if cancellation
    /// was requested before or during the wait.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (flag, cvar) = &*self.inner;
        let deadline = Instant::now() + duration;
        let mut cancelled = flag.lock().unwrap_or_else(|e| e.into_inner());

        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (guard, _) = cvar
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(|e| e.into_inner());
            cancelled = guard;
        }

        false
    }
}

impl std::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
