// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed sink: a JSON snapshot of the latest reading and a CSV export
//! of the baseline

use super::{Sink, SinkError};
use gw_core::{Reading, SampleSet};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

const SOURCE_TAG: &str = "metamask_api";
const CSV_HEADER: &str = "Timestamp,Suggested_Max_Fee_Gwei,Base_Fee_Gwei,Priority_Fee_Gwei";

/// Writes snapshots and exports to local files.
///
/// Either output can be disabled by leaving its path unset.
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    snapshot_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    timestamp: String,
    #[serde(rename = "timestamp_ms")]
    timestamp_ms: i64,
    gas_price: GasPrice,
    base_fee: Option<f64>,
    priority_fee: Option<f64>,
    suggested_max_fee_per_gas: f64,
    suggested_max_priority_fee_per_gas: Option<f64>,
    source: &'static str,
}

#[derive(Serialize)]
struct GasPrice {
    gwei: f64,
    /// Integer smallest-unit value as a string, so it survives JSON consumers
    /// that parse numbers as doubles
    wei: String,
}

impl Snapshot {
    fn from_reading(reading: &Reading) -> Self {
        let fee = reading.suggested_max_fee();
        Self {
            timestamp: reading.captured_at().to_rfc3339(),
            timestamp_ms: reading.captured_at().timestamp_millis(),
            gas_price: GasPrice {
                gwei: round2(fee),
                wei: to_wei(fee).to_string(),
            },
            base_fee: reading.base_fee().map(round2),
            priority_fee: reading.priority_fee().map(round2),
            suggested_max_fee_per_gas: round2(fee),
            suggested_max_priority_fee_per_gas: reading.priority_fee().map(round2),
            source: SOURCE_TAG,
        }
    }
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn with_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    pub fn csv_path(&self) -> Option<&Path> {
        self.csv_path.as_deref()
    }
}

impl Sink for FileSink {
    fn write(&self, reading: &Reading) -> Result<(), SinkError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let json = serde_json::to_string_pretty(&Snapshot::from_reading(reading))?;
        write_atomic(path, json.as_bytes())
    }

    fn export_batch(&self, samples: &SampleSet) -> Result<(), SinkError> {
        let Some(path) = &self.csv_path else {
            return Ok(());
        };
        if samples.is_empty() {
            tracing::debug!("no samples, skipping CSV export");
            return Ok(());
        }

        let mut out = String::with_capacity(64 * (samples.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');
        for reading in samples {
            out.push_str(&csv_row(reading));
            out.push('\n');
        }

        write_atomic(path, out.as_bytes())?;
        tracing::info!(path = %path.display(), rows = samples.len(), "exported baseline CSV");
        Ok(())
    }
}

fn csv_row(reading: &Reading) -> String {
    let optional = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
    format!(
        "{},{},{},{}",
        reading.captured_at().to_rfc3339(),
        reading.suggested_max_fee(),
        optional(reading.base_fee()),
        optional(reading.priority_fee()),
    )
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn to_wei(gwei: f64) -> u64 {
    // Float-to-int casts saturate, and fees are validated non-negative
    (gwei * 1e9).trunc() as u64
}

/// Write to a sibling temp file then rename over the target
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SinkError> {
    let io_err = |source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    {
        let mut file = std::fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(contents).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
    }

    std::fs::rename(&temp_path, path).map_err(io_err)
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
