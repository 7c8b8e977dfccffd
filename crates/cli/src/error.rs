// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.

use gw_core::ConfigError;
use gw_engine::MonitorError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders
impl CliError {
    pub fn config(err: ConfigError, path: Option<&Path>) -> Self {
        let mut cli = CliError::new("Invalid monitor configuration")
            .with_context(err.to_string());
        if let Some(path) = path {
            cli = cli.with_context(format!("Config file: {}", path.display()));
        }
        cli.with_suggestion("Durations use humantime syntax, e.g. \"90s\", \"30m\"")
            .with_suggestion("Run `gaswatch --help` to list the flag overrides")
            .with_source(err)
    }

    pub fn monitor(err: MonitorError, api_url: &str) -> Self {
        match err {
            MonitorError::EmptyBaseline(_) => {
                CliError::new("Baseline collection produced no samples")
                    .with_context(format!("Every fetch from {} failed", api_url))
                    .with_context("A threshold cannot be computed from an empty window")
                    .with_suggestion("Check network access to the fee endpoint")
                    .with_suggestion("Point at another endpoint with --api-url")
                    .with_source(err)
            }
            other => CliError::new(other.to_string()).with_source(other),
        }
    }

    pub fn action_failed(detail: &str) -> Self {
        CliError::new("Triggered action failed")
            .with_context(detail.to_string())
            .with_context("The trigger is consumed and will not fire again in this run")
            .with_suggestion("Inspect the log file for the action's error output")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
