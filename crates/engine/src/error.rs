// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the monitor engine

use gw_core::{ThresholdError, TransitionError};
use thiserror::Error;

/// Errors that end a monitor run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    #[error("baseline collection produced no usable samples: {0}")]
    EmptyBaseline(#[from] ThresholdError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("trigger already fired; the watcher runs at most once")]
    AlreadyTriggered,
}
