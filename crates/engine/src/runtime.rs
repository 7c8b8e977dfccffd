// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor runtime: drives the lifecycle and the realtime loop

use crate::baseline::BaselineCollector;
use crate::error::MonitorError;
use crate::sampler::{Sampler, SamplerStats};
use crate::watcher::{WatchOutcome, Watcher};
use gw_adapters::{ActionExecutor, FeeSource, Sink};
use gw_core::{CancelToken, Clock, MonitorConfig, MonitorState, Threshold};
use serde::Serialize;

/// Adapter dependencies for a monitor
pub struct MonitorDeps<F, S, A> {
    pub source: F,
    /// `None` disables snapshot and export output
    pub sink: Option<S>,
    pub action: A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Baseline, threshold, watch and trigger
    Lifecycle,
    /// Continuous sampling into the sink only
    Realtime,
}

/// What happened when the trigger fired
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerReport {
    pub fee: f64,
    pub checks: u64,
    pub action_ok: bool,
    /// Action description on success, error message on failure
    pub detail: String,
}

/// Summary of a run, available on every exit path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub state: MonitorState,
    pub samples: usize,
    pub threshold: Option<Threshold>,
    pub stats: SamplerStats,
    pub trigger: Option<TriggerReport>,
    pub interrupted: bool,
}

impl RunReport {
    /// Whether the run should end with a failing exit status
    pub fn is_failure(&self) -> bool {
        self.trigger.as_ref().is_some_and(|t| !t.action_ok)
    }
}

/// Owns the lifecycle state and every component of one run
pub struct Monitor<F, S, A, C: Clock> {
    config: MonitorConfig,
    sampler: Sampler<F, S, C>,
    collector: BaselineCollector,
    watcher: Watcher<A>,
    state: MonitorState,
    mode: RunMode,
    samples: usize,
    threshold: Option<Threshold>,
    trigger: Option<TriggerReport>,
    interrupted: bool,
}

impl<F, S, A, C> Monitor<F, S, A, C>
where
    F: FeeSource,
    S: Sink,
    A: ActionExecutor,
    C: Clock,
{
    pub fn new(config: MonitorConfig, deps: MonitorDeps<F, S, A>, clock: C, cancel: CancelToken) -> Self {
        let sampler = Sampler::new(deps.source, deps.sink, clock, config.retry_policy(), cancel);
        Self {
            collector: BaselineCollector::new(config.progress_every),
            watcher: Watcher::new(deps.action),
            sampler,
            config,
            state: MonitorState::Idle,
            mode: RunMode::Lifecycle,
            samples: 0,
            threshold: None,
            trigger: None,
            interrupted: false,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Baseline, threshold, then watch until the trigger fires or the run
    /// is interrupted.
    ///
    /// An empty baseline ends the run with [`MonitorError::EmptyBaseline`];
    /// [`Monitor::report`] still describes what was collected.
    pub fn run(&mut self) -> Result<RunReport, MonitorError> {
        self.mode = RunMode::Lifecycle;
        self.state.advance(MonitorState::Collecting)?;

        let outcome = self.collector.collect(
            &mut self.sampler,
            self.config.collection_window,
            self.config.fetch_interval,
        );
        self.samples = outcome.samples.len();
        if !outcome.samples.is_empty() {
            self.sampler.export_batch(&outcome.samples);
        }
        if outcome.interrupted {
            self.interrupted = true;
            return Ok(self.report());
        }

        let threshold = Threshold::compute(&outcome.samples)?;
        self.state.advance(MonitorState::Thresholded)?;
        tracing::info!(%threshold, "threshold calculated");
        self.threshold = Some(threshold.clone());

        self.state.advance(MonitorState::Watching)?;
        let outcome = self.watcher.run(
            &mut self.sampler,
            &threshold,
            self.config.watch_poll_interval(),
            self.config.retry_wait,
        )?;

        match outcome {
            WatchOutcome::Triggered {
                reading,
                action,
                checks,
            } => {
                self.state.advance(MonitorState::Triggered)?;
                let (action_ok, detail) = match action {
                    Ok(report) => (true, report.description),
                    Err(e) => (false, e.to_string()),
                };
                self.trigger = Some(TriggerReport {
                    fee: reading.suggested_max_fee(),
                    checks,
                    action_ok,
                    detail,
                });
            }
            WatchOutcome::Cancelled { .. } => self.interrupted = true,
        }

        Ok(self.report())
    }

    /// Sample forever at `fetch_interval`, feeding the sink, until
    /// interrupted. No baseline, threshold or trigger.
    pub fn run_realtime(&mut self) -> RunReport {
        self.mode = RunMode::Realtime;
        tracing::info!(
            interval_ms = self.config.fetch_interval.as_millis() as u64,
            "starting realtime monitoring"
        );

        while !self.sampler.is_cancelled() {
            let wait = match self.sampler.fetch() {
                Some(_) => self.config.fetch_interval,
                None => {
                    tracing::warn!("failed to fetch current fee, retrying");
                    self.config.retry_wait
                }
            };
            if !self.sampler.wait(wait) {
                break;
            }
        }

        tracing::info!(readings = self.sampler.stats().readings, "realtime monitoring stopped");
        self.interrupted = true;
        self.report()
    }

    /// Snapshot of the run so far
    pub fn report(&self) -> RunReport {
        RunReport {
            mode: self.mode,
            state: self.state,
            samples: self.samples,
            threshold: self.threshold.clone(),
            stats: self.sampler.stats(),
            trigger: self.trigger.clone(),
            interrupted: self.interrupted,
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
