// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sampler: one logical fetch with bounded retry, forwarded to the sink

use gw_adapters::{FeeSource, Sink};
use gw_core::{CancelToken, Clock, Reading, RetryPolicy, SampleSet};
use serde::Serialize;
use std::time::Duration;

/// Counters accumulated across a run, for reporting only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SamplerStats {
    /// Individual source calls
    pub attempts: u64,
    /// Fetches that produced a reading
    pub readings: u64,
    pub transient_failures: u64,
    pub data_shape_failures: u64,
    /// Fetches that gave up after the full retry budget
    pub exhausted: u64,
    pub sink_failures: u64,
}

/// Drives a [`FeeSource`] with retry and backoff.
///
/// Callers only learn whether a reading was obtained; classification,
/// backoff and sink failures are absorbed here.
pub struct Sampler<F, S, C: Clock> {
    source: F,
    sink: Option<S>,
    clock: C,
    policy: RetryPolicy,
    cancel: CancelToken,
    stats: SamplerStats,
}

impl<F, S, C> Sampler<F, S, C>
where
    F: FeeSource,
    S: Sink,
    C: Clock,
{
    pub fn new(source: F, sink: Option<S>, clock: C, policy: RetryPolicy, cancel: CancelToken) -> Self {
        Self {
            source,
            sink,
            clock,
            policy,
            cancel,
            stats: SamplerStats::default(),
        }
    }

    /// Fetch one reading.
    ///
    /// Transient failures are retried up to the policy's budget; a
    /// data-shape failure gives up immediately. Returns `None` when no
    /// reading was obtained, including when cancelled during a backoff.
    pub fn fetch(&mut self) -> Option<Reading> {
        let total = self.policy.total_attempts();
        for attempt in 0..total {
            self.stats.attempts += 1;

            match self.source.fetch() {
                Ok(reading) => {
                    self.stats.readings += 1;
                    tracing::info!(
                        fee = reading.suggested_max_fee(),
                        "fetched gas fee: {:.2} Gwei",
                        reading.suggested_max_fee()
                    );
                    self.forward(&reading);
                    return Some(reading);
                }
                Err(e) if e.is_retryable() => {
                    self.stats.transient_failures += 1;
                    tracing::warn!(attempt = attempt + 1, total, error = %e, "fetch attempt failed");

                    let Some(wait) = self.policy.backoff_after(attempt) else {
                        break;
                    };
                    tracing::info!(wait_ms = wait.as_millis() as u64, "retrying after backoff");
                    if !self.wait(wait) {
                        return None;
                    }
                }
                Err(e) => {
                    self.stats.data_shape_failures += 1;
                    tracing::error!(error = %e, "unusable response, skipping this fetch");
                    return None;
                }
            }
        }

        self.stats.exhausted += 1;
        tracing::error!(attempts = total, "max retries reached, skipping this fetch");
        None
    }

    /// Hand the complete baseline to the sink; failures are logged only
    pub fn export_batch(&mut self, samples: &SampleSet) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.export_batch(samples) {
            self.stats.sink_failures += 1;
            tracing::error!(error = %e, "baseline export failed");
        }
    }

    /// Block for `duration` on the sampler's clock.
    ///
    /// Returns `false` if cancelled before the wait completed.
    pub fn wait(&self, duration: Duration) -> bool {
        self.clock.sleep(duration, &self.cancel)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn forward(&mut self, reading: &Reading) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.write(reading) {
            self.stats.sink_failures += 1;
            tracing::error!(error = %e, "snapshot write failed");
        }
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
