// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exponential backoff policy for upstream fetches

use std::time::Duration;

/// Retry budget and backoff schedule.
///
/// A fetch makes one initial attempt plus up to `max_retries` retries.
/// After failed attempt `i` (0-indexed) the caller waits
/// `backoff_unit * backoff_factor^i` before attempt `i + 1`. There is no
/// jitter and no wait after the last attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_factor: u32,
    pub backoff_unit: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, backoff_factor: u32, backoff_unit: Duration) -> Self {
        Self {
            max_retries,
            backoff_factor,
            backoff_unit,
        }
    }

    /// Total number of attempts the budget allows
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait after failed attempt `attempt`, or `None` if no retry follows it
    pub fn backoff_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }
        let multiplier = self.backoff_factor.saturating_pow(attempt);
        Some(self.backoff_unit.saturating_mul(multiplier))
    }

    /// The complete wait schedule for a fetch that never succeeds
    pub fn schedule(&self) -> Vec<Duration> {
        (0..self.max_retries)
            .filter_map(|attempt| self.backoff_after(attempt))
            .collect()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, 2, Duration::from_secs(1))
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
