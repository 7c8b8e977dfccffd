// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The downstream action run once the trigger fires

mod simulated;

pub use simulated::SimulatedExecutor;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ActionCall, FakeActionExecutor};

use gw_core::{Reading, Threshold};
use std::time::Duration;
use thiserror::Error;

/// Errors from action execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("action failed: {0}")]
    Failed(String),
}

/// What a successful action did
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub description: String,
    pub elapsed: Duration,
}

/// Performs the triggered action.
///
/// A real implementation submits a transaction priced from `reading`; it
/// must report failure distinctly so the run report can surface it.
pub trait ActionExecutor: Clone + Send + Sync + 'static {
    fn execute(&self, reading: &Reading, threshold: &Threshold) -> Result<ActionReport, ActionError>;
}
