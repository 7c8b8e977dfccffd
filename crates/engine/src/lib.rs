// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Gas fee monitor engine: sampling, baseline, watch and trigger

mod baseline;
mod error;
mod runtime;
mod sampler;
mod watcher;

pub use baseline::{BaselineCollector, BaselineOutcome};
pub use error::MonitorError;
pub use runtime::{Monitor, MonitorDeps, RunMode, RunReport, TriggerReport};
pub use sampler::{Sampler, SamplerStats};
pub use watcher::{WatchOutcome, Watcher};
