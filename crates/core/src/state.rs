// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor lifecycle state machine
//!
//! `Idle → Collecting → Thresholded → Watching → Triggered`. Transitions are
//! strictly forward; there is no re-baselining once a threshold exists.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Lifecycle phase of a monitor run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorState {
    /// Nothing started yet
    Idle,
    /// Baseline samples are being gathered
    Collecting,
    /// Threshold computed from a non-empty baseline
    Thresholded,
    /// Live readings are compared against the threshold
    Watching,
    /// The one-shot action has been invoked (terminal)
    Triggered,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("illegal monitor transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: MonitorState,
    pub to: MonitorState,
}

impl MonitorState {
    /// The only state reachable from `self`, if any
    pub fn successor(self) -> Option<MonitorState> {
        match self {
            MonitorState::Idle => Some(MonitorState::Collecting),
            MonitorState::Collecting => Some(MonitorState::Thresholded),
            MonitorState::Thresholded => Some(MonitorState::Watching),
            MonitorState::Watching => Some(MonitorState::Triggered),
            MonitorState::Triggered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.successor().is_none()
    }

    /// Move to `next`, refusing anything but the single forward edge
    pub fn advance(&mut self, next: MonitorState) -> Result<(), TransitionError> {
        if self.successor() != Some(next) {
            return Err(TransitionError {
                from: *self,
                to: next,
            });
        }
        tracing::debug!(from = %self, to = %next, "monitor state transition");
        *self = next;
        Ok(())
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonitorState::Idle => "idle",
            MonitorState::Collecting => "collecting",
            MonitorState::Thresholded => "thresholded",
            MonitorState::Watching => "watching",
            MonitorState::Triggered => "triggered",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
