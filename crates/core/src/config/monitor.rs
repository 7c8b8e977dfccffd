// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitor configuration
//!
//! One immutable value built at startup (defaults, optionally overlaid by a
//! TOML file and CLI flags) and handed to each component's constructor.

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// MetaMask suggested gas fees for Ethereum mainnet
pub const DEFAULT_API_URL: &str = "https://gas.api.cx.metamask.io/networks/1/suggestedGasFees";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which fee tier of the upstream quote to read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl FeeLevel {
    /// Key of the tier object in the upstream response
    pub fn key(self) -> &'static str {
        match self {
            FeeLevel::Low => "low",
            FeeLevel::Medium => "medium",
            FeeLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorConfig {
    /// Upstream fee quote endpoint
    pub api_url: String,
    pub fee_level: FeeLevel,
    /// Cadence of baseline sampling and realtime mode
    #[serde(with = "humantime_serde")]
    pub fetch_interval: Duration,
    /// Length of the baseline observation window
    #[serde(with = "humantime_serde")]
    pub collection_window: Duration,
    /// Wait after a fetch that produced no reading
    #[serde(with = "humantime_serde")]
    pub retry_wait: Duration,
    /// Wait after a reading that did not trigger; falls back to `retry_wait`
    #[serde(with = "humantime_serde")]
    pub poll_interval: Option<Duration>,
    pub max_retries: u32,
    pub backoff_factor: u32,
    #[serde(with = "humantime_serde")]
    pub backoff_unit: Duration,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Baseline iterations between progress log lines
    pub progress_every: u64,
    pub json_output: bool,
    pub json_path: PathBuf,
    pub csv_export: bool,
    pub csv_path: PathBuf,
    /// Duration of the simulated action
    #[serde(with = "humantime_serde")]
    pub action_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fee_level: FeeLevel::Medium,
            fetch_interval: Duration::from_secs(1),
            collection_window: Duration::from_secs(30 * 60),
            retry_wait: Duration::from_secs(60),
            poll_interval: None,
            max_retries: 3,
            backoff_factor: 2,
            backoff_unit: Duration::from_secs(1),
            request_timeout: Duration::from_secs(10),
            progress_every: 60,
            json_output: true,
            json_path: PathBuf::from("gas_monitor_data.json"),
            csv_export: true,
            csv_path: PathBuf::from("gas_fees_data.csv"),
            action_delay: Duration::from_secs(2),
        }
    }
}

impl MonitorConfig {
    /// Load from a TOML file; absent keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject values that would make the loops meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        if self.fetch_interval.is_zero() {
            return Err(ConfigError::Invalid("fetch_interval must be > 0".into()));
        }
        if self.collection_window < self.fetch_interval {
            return Err(ConfigError::Invalid(format!(
                "collection_window ({}) is shorter than fetch_interval ({})",
                humantime::format_duration(self.collection_window),
                humantime::format_duration(self.fetch_interval)
            )));
        }
        if self.retry_wait.is_zero() {
            return Err(ConfigError::Invalid("retry_wait must be > 0".into()));
        }
        if self.poll_interval.is_some_and(|d| d.is_zero()) {
            return Err(ConfigError::Invalid("poll_interval must be > 0".into()));
        }
        if self.backoff_factor == 0 {
            return Err(ConfigError::Invalid("backoff_factor must be >= 1".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid("request_timeout must be > 0".into()));
        }
        if self.progress_every == 0 {
            return Err(ConfigError::Invalid("progress_every must be >= 1".into()));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.backoff_factor, self.backoff_unit)
    }

    /// Number of baseline iterations: `floor(collection_window / fetch_interval)`
    pub fn baseline_samples(&self) -> u64 {
        if self.fetch_interval.is_zero() {
            return 0;
        }
        let total = self.collection_window.as_nanos() / self.fetch_interval.as_nanos();
        u64::try_from(total).unwrap_or(u64::MAX)
    }

    /// Wait between non-triggering watch checks
    pub fn watch_poll_interval(&self) -> Duration {
        self.poll_interval.unwrap_or(self.retry_wait)
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
