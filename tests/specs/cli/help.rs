//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_mode_and_overrides() {
    let temp = Project::empty();

    temp.gaswatch()
        .args(&["--help"])
        .passes()
        .stdout_has("--realtime")
        .stdout_has("--config")
        .stdout_has("--window")
        .stdout_has("--poll-interval")
        .stdout_has("--format");
}

#[test]
fn version_prints_name() {
    let temp = Project::empty();

    temp.gaswatch()
        .args(&["--version"])
        .passes()
        .stdout_has("gaswatch");
}

#[test]
fn unknown_flag_is_rejected() {
    let temp = Project::empty();

    temp.gaswatch().args(&["--threshold", "12"]).fails();
}
