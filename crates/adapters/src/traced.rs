// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::action::{ActionError, ActionExecutor, ActionReport};
use crate::sink::{Sink, SinkError};
use crate::source::{FeeSource, FetchError};
use gw_core::{Reading, SampleSet, Threshold};
use std::time::Instant;

/// Wrapper that adds tracing to any FeeSource
#[derive(Clone)]
pub struct TracedFeeSource<F> {
    inner: F,
}

impl<F> TracedFeeSource<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FeeSource> FeeSource for TracedFeeSource<F> {
    fn fetch(&self) -> Result<Reading, FetchError> {
        let span = tracing::info_span!("source.fetch");
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.fetch();
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(reading) => tracing::debug!(
                fee = reading.suggested_max_fee(),
                base_fee = ?reading.base_fee(),
                priority_fee = ?reading.priority_fee(),
                elapsed_ms,
                "fetched"
            ),
            Err(e) => tracing::warn!(
                elapsed_ms,
                retryable = e.is_retryable(),
                error = %e,
                "fetch failed"
            ),
        }

        result
    }
}

/// Wrapper that adds tracing to any Sink
#[derive(Clone)]
pub struct TracedSink<S> {
    inner: S,
}

impl<S> TracedSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Sink> Sink for TracedSink<S> {
    fn write(&self, reading: &Reading) -> Result<(), SinkError> {
        let span = tracing::info_span!("sink.write", fee = reading.suggested_max_fee());
        let _guard = span.enter();

        let result = self.inner.write(reading);
        match &result {
            Ok(()) => tracing::trace!("snapshot written"),
            Err(e) => tracing::error!(error = %e, "snapshot write failed"),
        }

        result
    }

    fn export_batch(&self, samples: &SampleSet) -> Result<(), SinkError> {
        let span = tracing::info_span!("sink.export_batch", rows = samples.len());
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.export_batch(samples);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms, "export complete"),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "export failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any ActionExecutor
#[derive(Clone)]
pub struct TracedActionExecutor<A> {
    inner: A,
}

impl<A> TracedActionExecutor<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

impl<A: ActionExecutor> ActionExecutor for TracedActionExecutor<A> {
    fn execute(&self, reading: &Reading, threshold: &Threshold) -> Result<ActionReport, ActionError> {
        let span = tracing::info_span!(
            "action.execute",
            fee = reading.suggested_max_fee(),
            threshold = threshold.mean
        );
        let _guard = span.enter();

        tracing::info!("starting");
        let start = Instant::now();
        let result = self.inner.execute(reading, threshold);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(report) => tracing::info!(
                elapsed_ms,
                description = %report.description,
                "action completed"
            ),
            Err(e) => tracing::error!(elapsed_ms, error = %e, "action failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
