// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup

use crate::error::CliError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

/// Install the global subscriber: stderr always, plus `log_file` if given.
///
/// The returned guard flushes the file writer on drop and must outlive
/// the run.
pub fn setup_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, CliError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            std::fs::create_dir_all(dir).map_err(|e| {
                CliError::new(format!("Cannot create log directory {}", dir.display()))
                    .with_suggestion("Pass --no-log-file to log to stderr only")
                    .with_source(e)
            })?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to install logger: {}", e)))?;

    Ok(guard)
}

/// Directory and file name of the log path; a bare name lives in `.`
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), CliError> {
    let name = path.file_name().ok_or_else(|| {
        CliError::new(format!("Invalid log file path: {}", path.display()))
            .with_context("The path must name a file")
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, name))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
