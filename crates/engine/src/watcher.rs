// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-baseline watch loop with a one-shot trigger

use crate::error::MonitorError;
use crate::sampler::Sampler;
use gw_adapters::{ActionError, ActionExecutor, ActionReport, FeeSource, Sink};
use gw_core::{Clock, Reading, Threshold};
use std::time::Duration;

/// How a watch ended
#[derive(Debug, Clone, PartialEq)]
pub enum WatchOutcome {
    /// The predicate held; the action ran exactly once with this result
    Triggered {
        reading: Reading,
        action: Result<ActionReport, ActionError>,
        checks: u64,
    },
    /// Interrupted before any reading crossed the threshold
    Cancelled { checks: u64 },
}

/// Watches live readings against a fixed threshold.
///
/// Owns the executor and fires it at most once over its lifetime.
pub struct Watcher<A> {
    executor: A,
    fired: bool,
}

impl<A: ActionExecutor> Watcher<A> {
    pub fn new(executor: A) -> Self {
        Self {
            executor,
            fired: false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Poll until a reading's suggested fee is strictly below the
    /// threshold mean, or until cancelled.
    ///
    /// Waits `retry_wait` after a failed fetch and `poll_interval` after a
    /// reading that did not trigger. Once triggered, later calls fail with
    /// [`MonitorError::AlreadyTriggered`], even if the action failed.
    pub fn run<F, S, C>(
        &mut self,
        sampler: &mut Sampler<F, S, C>,
        threshold: &Threshold,
        poll_interval: Duration,
        retry_wait: Duration,
    ) -> Result<WatchOutcome, MonitorError>
    where
        F: FeeSource,
        S: Sink,
        C: Clock,
    {
        if self.fired {
            return Err(MonitorError::AlreadyTriggered);
        }

        tracing::info!(threshold = threshold.mean, "starting live monitoring");
        let mut checks = 0;

        loop {
            if sampler.is_cancelled() {
                return Ok(self.cancelled(checks));
            }

            let Some(reading) = sampler.fetch() else {
                tracing::warn!(
                    retry_wait_ms = retry_wait.as_millis() as u64,
                    "failed to fetch current fee, retrying"
                );
                if !sampler.wait(retry_wait) {
                    return Ok(self.cancelled(checks));
                }
                continue;
            };

            checks += 1;
            let fee = reading.suggested_max_fee();
            tracing::info!(
                current = fee,
                threshold = threshold.mean,
                "current: {:.4} Gwei | threshold: {:.4} Gwei | diff: {:+.4} Gwei",
                fee,
                threshold.mean,
                fee - threshold.mean
            );

            if threshold.is_triggered_by(fee) {
                tracing::info!(checks, "condition met: current fee below threshold");
                self.fired = true;
                let action = self.executor.execute(&reading, threshold);
                if let Err(e) = &action {
                    tracing::error!(error = %e, "action failed; trigger stays consumed");
                }
                return Ok(WatchOutcome::Triggered {
                    reading,
                    action,
                    checks,
                });
            }

            tracing::info!(
                poll_interval_ms = poll_interval.as_millis() as u64,
                "waiting: current fee >= threshold"
            );
            if !sampler.wait(poll_interval) {
                return Ok(self.cancelled(checks));
            }
        }
    }

    fn cancelled(&self, checks: u64) -> WatchOutcome {
        tracing::info!(checks, "monitoring stopped by interrupt");
        WatchOutcome::Cancelled { checks }
    }
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
