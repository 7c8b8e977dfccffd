// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline collection at a fixed cadence

use crate::sampler::Sampler;
use gw_adapters::{FeeSource, Sink};
use gw_core::{Clock, SampleSet};
use std::time::Duration;

/// Result of a baseline window
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineOutcome {
    pub samples: SampleSet,
    /// Iterations actually started (equals the target unless interrupted)
    pub attempted: u64,
    pub target: u64,
    pub interrupted: bool,
}

pub struct BaselineCollector {
    progress_every: u64,
}

impl BaselineCollector {
    pub fn new(progress_every: u64) -> Self {
        Self {
            progress_every: progress_every.max(1),
        }
    }

    /// Sample for `duration` at `interval`.
    ///
    /// Runs `floor(duration / interval)` iterations. Failed fetches are
    /// skipped, and every iteration sleeps a full `interval` whatever its
    /// outcome, so the cadence holds through failures.
    pub fn collect<F, S, C>(
        &self,
        sampler: &mut Sampler<F, S, C>,
        duration: Duration,
        interval: Duration,
    ) -> BaselineOutcome
    where
        F: FeeSource,
        S: Sink,
        C: Clock,
    {
        let total = iterations(duration, interval);
        tracing::info!(
            total,
            window_s = duration.as_secs(),
            interval_ms = interval.as_millis() as u64,
            "starting baseline collection"
        );

        let started = sampler.clock().now();
        let mut samples = SampleSet::new();
        let mut attempted = 0;
        let mut interrupted = false;

        for i in 0..total {
            if sampler.is_cancelled() {
                interrupted = true;
                break;
            }

            attempted += 1;
            match sampler.fetch() {
                Some(reading) => samples.push(reading),
                None => tracing::debug!(iteration = i + 1, "sample skipped"),
            }

            if (i + 1) % self.progress_every == 0 {
                let elapsed = sampler.clock().now().saturating_duration_since(started);
                tracing::info!(
                    done = i + 1,
                    total,
                    samples = samples.len(),
                    elapsed_s = elapsed.as_secs(),
                    "progress: {:.1}%",
                    (i + 1) as f64 / total as f64 * 100.0
                );
            }

            if !sampler.wait(interval) {
                interrupted = true;
                break;
            }
        }

        if interrupted {
            tracing::warn!(attempted, samples = samples.len(), "baseline collection interrupted");
        } else {
            tracing::info!(attempted, samples = samples.len(), "baseline collection complete");
        }

        BaselineOutcome {
            samples,
            attempted,
            target: total,
            interrupted,
        }
    }
}

/// `floor(duration / interval)`; zero for a zero interval
fn iterations(duration: Duration, interval: Duration) -> u64 {
    if interval.is_zero() {
        return 0;
    }
    u64::try_from(duration.as_nanos() / interval.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod tests;
