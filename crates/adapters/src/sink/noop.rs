// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op sink for runs with persistence disabled

use super::{Sink, SinkError};
use gw_core::{Reading, SampleSet};

#[derive(Clone, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn write(&self, _reading: &Reading) -> Result<(), SinkError> {
        Ok(())
    }

    fn export_batch(&self, _samples: &SampleSet) -> Result<(), SinkError> {
        Ok(())
    }
}
