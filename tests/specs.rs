//! Behavioral specifications for the gaswatch CLI.
//!
//! These tests are black-box: they invoke the binary against a local stub
//! fee endpoint and verify stdout, stderr, written files and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/config.rs"]
mod cli_config;
#[path = "specs/cli/help.rs"]
mod cli_help;

// monitor/
#[path = "specs/monitor/lifecycle.rs"]
mod monitor_lifecycle;
#[path = "specs/monitor/failures.rs"]
mod monitor_failures;
