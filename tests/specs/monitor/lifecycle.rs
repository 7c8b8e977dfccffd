//! Full lifecycle specs: baseline, threshold, watch, trigger

use crate::prelude::*;

/// Baseline [10, 12, 14, 16, 18] (mean 14), one miss at 15, trigger at 13.9
fn triggering_server() -> FeeServer {
    FeeServer::start(
        [10.0, 12.0, 14.0, 16.0, 18.0, 15.0, 13.9]
            .into_iter()
            .map(|fee| Reply::Ok(quote(fee)))
            .collect(),
    )
}

#[test]
fn run_triggers_once_below_baseline_mean() {
    let temp = Project::empty();
    let server = triggering_server();

    temp.gaswatch()
        .args(&["--api-url", server.url()])
        .args(FAST_RUN)
        .passes()
        .stdout_has("State:       triggered")
        .stdout_has("Samples:     5")
        .stdout_has("Threshold:   14.0000 Gwei")
        .stdout_has("fired at 13.9000 Gwei after 2 checks, action ok");

    assert_eq!(server.hits(), 7);
}

#[test]
fn json_report_is_machine_readable() {
    let temp = Project::empty();
    let server = triggering_server();

    let run = temp
        .gaswatch()
        .args(&["--api-url", server.url(), "--format", "json"])
        .args(FAST_RUN)
        .passes();
    let report = run.stdout_json();

    assert_eq!(report["mode"], "lifecycle");
    assert_eq!(report["state"], "triggered");
    assert_eq!(report["samples"], 5);
    assert_eq!(report["threshold"]["mean"], 14.0);
    assert_eq!(report["threshold"]["min"], 10.0);
    assert_eq!(report["threshold"]["max"], 18.0);
    assert_eq!(report["trigger"]["fee"], 13.9);
    assert_eq!(report["trigger"]["action_ok"], true);
    assert_eq!(report["interrupted"], false);
}

#[test]
fn snapshot_and_csv_are_written() {
    let temp = Project::empty();
    let server = triggering_server();

    temp.gaswatch()
        .args(&["--api-url", server.url()])
        .args(FAST_RUN)
        .passes();

    let snapshot: serde_json::Value =
        serde_json::from_str(&temp.read("gas_monitor_data.json")).unwrap();
    assert_eq!(snapshot["suggestedMaxFeePerGas"], 13.9);
    assert_eq!(snapshot["gasPrice"]["wei"], "13900000000");
    assert_eq!(snapshot["source"], "metamask_api");

    let csv = temp.read("gas_fees_data.csv");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Timestamp,Suggested_Max_Fee_Gwei,Base_Fee_Gwei,Priority_Fee_Gwei"
    );
    assert_eq!(lines.len(), 6);
    assert!(lines[1].contains(",10,9,1.5"), "row: {}", lines[1]);
}

#[test]
fn outputs_can_be_disabled() {
    let temp = Project::empty();
    let server = triggering_server();

    temp.gaswatch()
        .args(&["--api-url", server.url(), "--no-json", "--no-csv"])
        .args(FAST_RUN)
        .passes();

    assert!(!temp.path().join("gas_monitor_data.json").exists());
    assert!(!temp.path().join("gas_fees_data.csv").exists());
}

#[test]
fn log_file_records_the_run() {
    let temp = Project::empty();
    let server = triggering_server();
    let args: Vec<&str> = FAST_RUN
        .iter()
        .copied()
        .filter(|a| *a != "--no-log-file")
        .collect();

    temp.gaswatch()
        .args(&["--api-url", server.url(), "--log-file", "logs/monitor.log"])
        .args(&args)
        .passes();

    let log = temp.read("logs/monitor.log");
    assert!(log.contains("threshold calculated"), "log: {log}");
    assert!(log.contains("condition met"), "log: {log}");
}
