// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires config, adapters and the engine together for one run

use crate::error::CliError;
use crate::logging::setup_logging;
use crate::output::print_report;
use crate::Cli;
use anyhow::{Context, Result};
use gw_adapters::{
    FileSink, HttpFeeSource, SimulatedExecutor, TracedActionExecutor, TracedFeeSource, TracedSink,
};
use gw_core::{CancelToken, MonitorConfig, SystemClock};
use gw_engine::{Monitor, MonitorDeps};
use std::process::ExitCode;

pub(crate) fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.load_config()?;

    let log_file = (!cli.no_log_file).then_some(cli.log_file.as_path());
    let _log_guard = setup_logging(log_file)?;

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping monitor...");
        handler_token.cancel();
    })
    .context("failed to install interrupt handler")?;

    let mut monitor = build_monitor(&config, cancel);

    if cli.realtime {
        tracing::info!(
            api_url = %config.api_url,
            snapshot = ?config.json_output.then_some(&config.json_path),
            "realtime mode"
        );
        let report = monitor.run_realtime();
        print_report(&report, cli.format);
        return Ok(ExitCode::SUCCESS);
    }

    tracing::info!(
        api_url = %config.api_url,
        window = %humantime::format_duration(config.collection_window),
        interval = %humantime::format_duration(config.fetch_interval),
        target_samples = config.baseline_samples(),
        "starting gas fee monitor"
    );

    match monitor.run() {
        Ok(report) => {
            print_report(&report, cli.format);
            match &report.trigger {
                Some(trigger) if !trigger.action_ok => {
                    Err(CliError::action_failed(&trigger.detail).into())
                }
                _ => Ok(ExitCode::SUCCESS),
            }
        }
        Err(e) => {
            print_report(&monitor.report(), cli.format);
            Err(CliError::monitor(e, &config.api_url).into())
        }
    }
}

type LiveMonitor = Monitor<
    TracedFeeSource<HttpFeeSource<SystemClock>>,
    TracedSink<FileSink>,
    TracedActionExecutor<SimulatedExecutor<SystemClock>>,
    SystemClock,
>;

fn build_monitor(config: &MonitorConfig, cancel: CancelToken) -> LiveMonitor {
    let clock = SystemClock;

    let source = HttpFeeSource::new(
        config.api_url.clone(),
        config.fee_level,
        config.request_timeout,
        clock.clone(),
    );

    let mut sink = FileSink::new();
    if config.json_output {
        sink = sink.with_snapshot(&config.json_path);
    }
    if config.csv_export {
        sink = sink.with_csv(&config.csv_path);
    }
    let sink = (config.json_output || config.csv_export).then(|| TracedSink::new(sink));

    let action = SimulatedExecutor::new(clock.clone(), config.action_delay);

    Monitor::new(
        config.clone(),
        MonitorDeps {
            source: TracedFeeSource::new(source),
            sink,
            action: TracedActionExecutor::new(action),
        },
        clock,
        cancel,
    )
}
