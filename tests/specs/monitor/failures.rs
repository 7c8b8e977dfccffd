//! Failure specs: unreachable or misbehaving fee endpoints

use crate::prelude::*;

/// One retry with a short backoff, so exhausted fetches stay fast
const QUICK_RETRY: &str = "max_retries = 1\nbackoff_unit = \"10ms\"\n";

#[test]
fn unreachable_endpoint_fails_with_empty_baseline() {
    let temp = Project::empty();
    temp.file("gaswatch.toml", QUICK_RETRY);
    let url = dead_url();

    temp.gaswatch()
        .args(&["--config", "gaswatch.toml", "--api-url", &url])
        .args(FAST_RUN)
        .fails()
        .stdout_has("State:       collecting")
        .stdout_has("Samples:     0")
        .stderr_has("Baseline collection produced no samples")
        .stderr_has(&url);

    assert!(!temp.path().join("gas_fees_data.csv").exists());
}

#[test]
fn malformed_responses_are_not_retried() {
    let temp = Project::empty();
    temp.file("gaswatch.toml", QUICK_RETRY);
    let server = FeeServer::start(vec![Reply::Ok("<html>rate limited</html>".into())]);

    temp.gaswatch()
        .args(&["--config", "gaswatch.toml", "--api-url", server.url()])
        .args(FAST_RUN)
        .fails()
        .stderr_has("Baseline collection produced no samples");

    // One request per baseline iteration, no retries
    assert_eq!(server.hits(), 5);
}

#[test]
fn transient_errors_are_retried_and_absorbed() {
    let temp = Project::empty();
    temp.file("gaswatch.toml", QUICK_RETRY);
    let mut script = vec![Reply::Status(503)];
    script.extend(
        [10.0, 12.0, 14.0, 16.0, 18.0, 13.0]
            .into_iter()
            .map(|fee| Reply::Ok(quote(fee))),
    );
    let server = FeeServer::start(script);

    temp.gaswatch()
        .args(&["--config", "gaswatch.toml", "--api-url", server.url()])
        .args(FAST_RUN)
        .passes()
        .stdout_has("Samples:     5")
        .stdout_has("1 transient");
}
