// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for the final run report

use clap::ValueEnum;
use gw_engine::{RunMode, RunReport};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print the run report to stdout in the given format
pub fn print_report(report: &RunReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(report) {
                println!("{}", json);
            }
        }
    }
}

pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &RunReport) -> std::fmt::Result {
    let mode = match report.mode {
        RunMode::Lifecycle => "lifecycle",
        RunMode::Realtime => "realtime",
    };
    writeln!(out, "Run summary ({})", mode)?;
    writeln!(out, "  State:       {}", report.state)?;
    if report.interrupted {
        writeln!(out, "  Interrupted: yes")?;
    }

    if report.mode == RunMode::Lifecycle {
        writeln!(out, "  Samples:     {}", report.samples)?;
    }

    if let Some(t) = &report.threshold {
        writeln!(out, "  Threshold:   {:.4} Gwei (mean)", t.mean)?;
        writeln!(out, "    Median:    {:.4} Gwei", t.median)?;
        writeln!(out, "    StdDev:    {:.4} Gwei", t.std_dev)?;
        writeln!(out, "    Min:       {:.4} Gwei", t.min)?;
        writeln!(out, "    Max:       {:.4} Gwei", t.max)?;
    }

    let s = &report.stats;
    writeln!(
        out,
        "  Fetches:     {} readings, {} attempts ({} transient, {} malformed, {} exhausted)",
        s.readings, s.attempts, s.transient_failures, s.data_shape_failures, s.exhausted
    )?;
    if s.sink_failures > 0 {
        writeln!(out, "  Sink errors: {}", s.sink_failures)?;
    }

    match &report.trigger {
        Some(t) => {
            let status = if t.action_ok { "ok" } else { "FAILED" };
            writeln!(
                out,
                "  Trigger:     fired at {:.4} Gwei after {} checks, action {}: {}",
                t.fee, t.checks, status, t.detail
            )?;
        }
        None if report.mode == RunMode::Lifecycle => writeln!(out, "  Trigger:     not fired")?,
        None => {}
    }

    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
