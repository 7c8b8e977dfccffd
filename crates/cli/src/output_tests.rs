// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gw_core::MonitorState;
use gw_engine::{SamplerStats, TriggerReport};

fn report() -> RunReport {
    RunReport {
        mode: RunMode::Lifecycle,
        state: MonitorState::Triggered,
        samples: 5,
        threshold: None,
        stats: SamplerStats {
            attempts: 7,
            readings: 6,
            transient_failures: 1,
            ..Default::default()
        },
        trigger: Some(TriggerReport {
            fee: 13.9,
            checks: 2,
            action_ok: true,
            detail: "simulated transaction at 13.9000 Gwei".into(),
        }),
        interrupted: false,
    }
}

#[test]
fn text_report_lists_state_samples_and_trigger() {
    let text = render_text(&report());

    assert!(text.contains("State:       triggered"), "{text}");
    assert!(text.contains("Samples:     5"), "{text}");
    assert!(text.contains("6 readings, 7 attempts (1 transient"), "{text}");
    assert!(text.contains("fired at 13.9000 Gwei after 2 checks, action ok"), "{text}");
    assert!(!text.contains("Interrupted"), "{text}");
}

#[test]
fn text_report_marks_interrupt_and_missing_trigger() {
    let report = RunReport {
        state: MonitorState::Watching,
        trigger: None,
        interrupted: true,
        ..report()
    };

    let text = render_text(&report);

    assert!(text.contains("Interrupted: yes"), "{text}");
    assert!(text.contains("Trigger:     not fired"), "{text}");
}

#[test]
fn realtime_report_omits_lifecycle_lines() {
    let report = RunReport {
        mode: RunMode::Realtime,
        state: MonitorState::Idle,
        trigger: None,
        ..report()
    };

    let text = render_text(&report);

    assert!(text.contains("Run summary (realtime)"), "{text}");
    assert!(!text.contains("Samples"), "{text}");
    assert!(!text.contains("Trigger"), "{text}");
}
