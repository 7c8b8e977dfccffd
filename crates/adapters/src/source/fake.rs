// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted fee source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FeeSource, FetchError};
use chrono::{DateTime, Utc};
use gw_core::{CancelToken, DataShapeError, Reading};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One scripted response
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FakeQuote {
    Fee(f64),
    Transient,
    Malformed,
}

struct FakeSourceState {
    script: VecDeque<FakeQuote>,
    fallback: FakeQuote,
    calls: usize,
    cancel_after: Option<(usize, CancelToken)>,
}

/// Fake source that replays a script, then repeats a fallback response
#[derive(Clone)]
pub struct FakeFeeSource {
    state: Arc<Mutex<FakeSourceState>>,
}

impl Default for FakeFeeSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FakeFeeSource {
    /// Replays `script` in order; once exhausted every call is transient
    pub fn new(script: impl IntoIterator<Item = FakeQuote>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeSourceState {
                script: script.into_iter().collect(),
                fallback: FakeQuote::Transient,
                calls: 0,
                cancel_after: None,
            })),
        }
    }

    /// Source that returns the given fees in order
    pub fn with_fees(fees: &[f64]) -> Self {
        Self::new(fees.iter().copied().map(FakeQuote::Fee))
    }

    /// Response used once the script runs out
    pub fn with_fallback(self, fallback: FakeQuote) -> Self {
        self.lock().fallback = fallback;
        self
    }

    /// Cancel `token` when the `n`th call is made
    pub fn cancel_after(self, n: usize, token: CancelToken) -> Self {
        self.lock().cancel_after = Some((n, token));
        self
    }

    /// Number of fetch calls made so far
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeSourceState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FeeSource for FakeFeeSource {
    fn fetch(&self) -> Result<Reading, FetchError> {
        let mut state = self.lock();
        state.calls += 1;
        if let Some((n, token)) = &state.cancel_after {
            if state.calls >= *n {
                token.cancel();
            }
        }

        let quote = match state.script.pop_front() {
            Some(quote) => quote,
            None => state.fallback,
        };

        match quote {
            FakeQuote::Fee(fee) => Ok(Reading::new(fake_time(state.calls), fee, None, None)?),
            FakeQuote::Transient => Err(FetchError::Transient("scripted failure".into())),
            FakeQuote::Malformed => Err(FetchError::DataShape(DataShapeError::NotAnObject)),
        }
    }
}

/// Deterministic timestamps, one second apart per call
fn fake_time(call: usize) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::seconds(call as i64)
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
