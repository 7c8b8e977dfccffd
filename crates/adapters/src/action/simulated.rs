// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stand-in executor: logs the trigger and waits a fixed delay

use super::{ActionError, ActionExecutor, ActionReport};
use gw_core::{CancelToken, Clock, Reading, Threshold};
use std::time::Duration;

#[derive(Clone)]
pub struct SimulatedExecutor<C: Clock> {
    clock: C,
    delay: Duration,
}

impl<C: Clock> SimulatedExecutor<C> {
    pub fn new(clock: C, delay: Duration) -> Self {
        Self { clock, delay }
    }
}

impl<C: Clock + 'static> ActionExecutor for SimulatedExecutor<C> {
    fn execute(&self, reading: &Reading, threshold: &Threshold) -> Result<ActionReport, ActionError> {
        let fee = reading.suggested_max_fee();
        tracing::info!(
            fee,
            threshold = threshold.mean,
            delay_ms = self.delay.as_millis() as u64,
            "simulating transaction submission"
        );

        let start = self.clock.now();
        // An action in progress is never interrupted
        self.clock.sleep(self.delay, &CancelToken::new());

        Ok(ActionReport {
            description: format!("simulated transaction at {:.4} Gwei", fee),
            elapsed: self.clock.now().saturating_duration_since(start),
        })
    }
}

#[cfg(test)]
#[path = "simulated_tests.rs"]
mod tests;
