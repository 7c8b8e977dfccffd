// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake action executor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ActionError, ActionExecutor, ActionReport};
use gw_core::{Reading, Threshold};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded execution
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCall {
    pub fee: f64,
    pub threshold: f64,
}

#[derive(Default)]
struct FakeActionState {
    calls: Vec<ActionCall>,
    failure: Option<String>,
}

/// Fake executor that records calls and succeeds unless told to fail
#[derive(Clone, Default)]
pub struct FakeActionExecutor {
    state: Arc<Mutex<FakeActionState>>,
}

impl FakeActionExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        let executor = Self::default();
        executor.lock().failure = Some(message.to_string());
        executor
    }

    pub fn calls(&self) -> Vec<ActionCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeActionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ActionExecutor for FakeActionExecutor {
    fn execute(&self, reading: &Reading, threshold: &Threshold) -> Result<ActionReport, ActionError> {
        let mut state = self.lock();
        state.calls.push(ActionCall {
            fee: reading.suggested_max_fee(),
            threshold: threshold.mean,
        });

        match &state.failure {
            Some(message) => Err(ActionError::Failed(message.clone())),
            None => Ok(ActionReport {
                description: "fake action".to_string(),
                elapsed: Duration::ZERO,
            }),
        }
    }
}
