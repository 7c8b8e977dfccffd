// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration modules

mod monitor;

pub use monitor::{ConfigError, FeeLevel, MonitorConfig, DEFAULT_API_URL};
