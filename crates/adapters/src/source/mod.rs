// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upstream fee quote sources

mod http;

pub use http::HttpFeeSource;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFeeSource, FakeQuote};

use gw_core::{DataShapeError, Reading};
use thiserror::Error;

/// Errors from a single fetch attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network failure, timeout or non-2xx status
    #[error("transport error: {0}")]
    Transient(String),
    /// The endpoint answered but the payload is unusable
    #[error("malformed response: {0}")]
    DataShape(#[from] DataShapeError),
}

impl FetchError {
    /// Whether another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transient(_))
    }
}

/// Produces one fee reading per call.
///
/// Implementations perform exactly one attempt; retry and backoff belong to
/// the caller.
pub trait FeeSource: Clone + Send + Sync + 'static {
    fn fetch(&self) -> Result<Reading, FetchError>;
}
