// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Sink, SinkError};
use gw_core::{Reading, SampleSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Recorded sink operation
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Write(Reading),
    ExportBatch(Vec<Reading>),
}

#[derive(Default)]
struct FakeSinkState {
    calls: Vec<SinkCall>,
    failing: bool,
}

/// Fake sink that records every call, optionally failing each one
#[derive(Clone, Default)]
pub struct FakeSink {
    state: Arc<Mutex<FakeSinkState>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose every call fails with an I/O error (still recorded)
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.lock().failing = true;
        sink
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.lock().calls.clone()
    }

    /// Readings passed to `write`, in order
    pub fn writes(&self) -> Vec<Reading> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Write(r) => Some(r.clone()),
                SinkCall::ExportBatch(_) => None,
            })
            .collect()
    }

    /// Batches passed to `export_batch`, in order
    pub fn exports(&self) -> Vec<Vec<Reading>> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::ExportBatch(batch) => Some(batch.clone()),
                SinkCall::Write(_) => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeSinkState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: SinkCall) -> Result<(), SinkError> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.failing {
            return Err(SinkError::Io {
                path: PathBuf::from("fake"),
                source: std::io::Error::other("fake sink failure"),
            });
        }
        Ok(())
    }
}

impl Sink for FakeSink {
    fn write(&self, reading: &Reading) -> Result<(), SinkError> {
        self.record(SinkCall::Write(reading.clone()))
    }

    fn export_batch(&self, samples: &SampleSet) -> Result<(), SinkError> {
        self.record(SinkCall::ExportBatch(samples.readings().to_vec()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
