// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence of readings for external consumers

mod file;
mod noop;

pub use file::FileSink;
pub use noop::NoOpSink;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, SinkCall};

use gw_core::{Reading, SampleSet};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from sink operations
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for readings.
///
/// Callers log failures and carry on; a sink never stops the monitor.
pub trait Sink: Clone + Send + Sync + 'static {
    /// Replace the current snapshot with `reading`
    fn write(&self, reading: &Reading) -> Result<(), SinkError>;

    /// Export the complete baseline in one go
    fn export_batch(&self, samples: &SampleSet) -> Result<(), SinkError>;
}
