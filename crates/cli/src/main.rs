// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gaswatch - gas fee baseline monitor with a one-shot trigger

mod error;
mod logging;
mod output;
mod run;

use clap::Parser;
use error::CliError;
use gw_core::{ConfigError, MonitorConfig};
use output::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "gaswatch",
    version,
    about = "Gas fee monitor - learns a baseline, then fires once when fees drop below it"
)]
pub(crate) struct Cli {
    /// Skip the baseline and stream readings to the snapshot file until interrupted
    #[arg(long)]
    realtime: bool,

    /// TOML config file; flags below override its values
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Fee quote endpoint
    #[arg(long)]
    api_url: Option<String>,

    /// Baseline window length (e.g. "30m")
    #[arg(long, value_parser = humantime::parse_duration)]
    window: Option<Duration>,

    /// Baseline and realtime sampling interval (e.g. "1s")
    #[arg(long, value_parser = humantime::parse_duration)]
    interval: Option<Duration>,

    /// Wait after a failed fetch while watching
    #[arg(long, value_parser = humantime::parse_duration)]
    retry_wait: Option<Duration>,

    /// Wait after a non-triggering reading (defaults to --retry-wait)
    #[arg(long, value_parser = humantime::parse_duration)]
    poll_interval: Option<Duration>,

    /// Duration of the simulated action
    #[arg(long, value_parser = humantime::parse_duration)]
    action_delay: Option<Duration>,

    /// Snapshot file for the latest reading
    #[arg(long)]
    json_path: Option<PathBuf>,

    /// Do not write the snapshot file
    #[arg(long)]
    no_json: bool,

    /// CSV export of the baseline
    #[arg(long)]
    csv_path: Option<PathBuf>,

    /// Do not export the baseline CSV
    #[arg(long)]
    no_csv: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log file, in addition to stderr
    #[arg(long, default_value = "gas_monitor.log")]
    log_file: PathBuf,

    /// Log to stderr only
    #[arg(long)]
    no_log_file: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn load_config(&self) -> Result<MonitorConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                MonitorConfig::load(path).map_err(|e| CliError::config(e, Some(path.as_path())))?
            }
            None => MonitorConfig::default(),
        };
        self.apply_overrides(&mut config);
        config
            .validate()
            .map_err(|e: ConfigError| CliError::config(e, self.config.as_deref()))?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut MonitorConfig) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(window) = self.window {
            config.collection_window = window;
        }
        if let Some(interval) = self.interval {
            config.fetch_interval = interval;
        }
        if let Some(wait) = self.retry_wait {
            config.retry_wait = wait;
        }
        if let Some(poll) = self.poll_interval {
            config.poll_interval = Some(poll);
        }
        if let Some(delay) = self.action_delay {
            config.action_delay = delay;
        }
        if let Some(path) = &self.json_path {
            config.json_path = path.clone();
        }
        if let Some(path) = &self.csv_path {
            config.csv_path = path.clone();
        }
        if self.no_json {
            config.json_output = false;
        }
        if self.no_csv {
            config.csv_export = false;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
