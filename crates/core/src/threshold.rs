// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Baseline threshold and the trigger decision rule

use crate::reading::SampleSet;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("cannot compute a threshold from an empty sample set")]
    EmptyInput,
}

/// Decision threshold plus descriptive statistics of the baseline.
///
/// Only `mean` takes part in the trigger decision. Every sample in the
/// window weighs the same; there is no outlier rejection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Threshold {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single sample
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sample_count: usize,
}

impl Threshold {
    /// Reduce a baseline sample set to its threshold
    pub fn compute(samples: &SampleSet) -> Result<Self, ThresholdError> {
        let mut fees = samples.suggested_fees();
        if fees.is_empty() {
            return Err(ThresholdError::EmptyInput);
        }

        fees.sort_by(f64::total_cmp);
        let n = fees.len();
        let min = fees[0];
        let max = fees[n - 1];

        // Rounding can push the mean a hair outside [min, max] when all
        // samples are equal.
        let mean = (fees.iter().sum::<f64>() / n as f64).clamp(min, max);

        let median = if n % 2 == 0 {
            (fees[n / 2 - 1] + fees[n / 2]) / 2.0
        } else {
            fees[n / 2]
        };

        let std_dev = if n > 1 {
            let sum_sq: f64 = fees.iter().map(|f| (f - mean).powi(2)).sum();
            (sum_sq / (n - 1) as f64).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            mean,
            median,
            std_dev,
            min,
            max,
            sample_count: n,
        })
    }

    /// Whether a live fee satisfies the trigger predicate.
    ///
    /// Strictly below the mean; a fee equal to the mean does not trigger.
    pub fn is_triggered_by(&self, fee: f64) -> bool {
        fee < self.mean
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.4} | median {:.4} | stddev {:.4} | min {:.4} | max {:.4} | n={}",
            self.mean, self.median, self.std_dev, self.min, self.max, self.sample_count
        )
    }
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
