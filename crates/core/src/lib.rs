// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-core: Core library for the gaswatch fee monitor
//!
//! This crate provides:
//! - Immutable fee readings and the baseline sample set
//! - Threshold statistics and the trigger decision rule
//! - The monitor lifecycle state machine
//! - Retry policy, configuration, clock and cancellation primitives

pub mod cancel;
pub mod clock;
pub mod config;
pub mod reading;
pub mod retry;
pub mod state;
pub mod threshold;

// Re-exports
pub use cancel::CancelToken;
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, FeeLevel, MonitorConfig};
pub use reading::{DataShapeError, Reading, SampleSet};
pub use retry::RetryPolicy;
pub use state::{MonitorState, TransitionError};
pub use threshold::{Threshold, ThresholdError};
