//! Configuration specs
//!
//! Invalid settings are rejected before any fetch is made.

use crate::prelude::*;

#[test]
fn window_shorter_than_interval_is_rejected() {
    let temp = Project::empty();
    let server = FeeServer::constant(10.0);

    temp.gaswatch()
        .args(&["--api-url", server.url(), "--window", "1s", "--interval", "5s", "--no-log-file"])
        .fails()
        .stderr_has("Invalid monitor configuration")
        .stderr_has("collection_window");

    assert_eq!(server.hits(), 0);
}

#[test]
fn unknown_config_key_is_rejected() {
    let temp = Project::empty();
    temp.file("gaswatch.toml", "fetch_intervall = \"1s\"\n");

    temp.gaswatch()
        .args(&["--config", "gaswatch.toml", "--no-log-file"])
        .fails()
        .stderr_has("gaswatch.toml");
}

#[test]
fn missing_config_file_is_reported() {
    let temp = Project::empty();

    temp.gaswatch()
        .args(&["--config", "nope.toml", "--no-log-file"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn non_http_url_is_rejected() {
    let temp = Project::empty();

    temp.gaswatch()
        .args(&["--api-url", "ftp://example.com/fees", "--no-log-file"])
        .fails()
        .stderr_has("api_url");
}

#[test]
fn malformed_duration_flag_is_rejected() {
    let temp = Project::empty();

    temp.gaswatch().args(&["--window", "half an hour"]).fails();
}
