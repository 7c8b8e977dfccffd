// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fee readings and the baseline sample set
//!
//! A [`Reading`] is one successful quote from the upstream fee endpoint.
//! Readings are validated on construction and immutable afterwards. The
//! baseline phase accumulates them into an append-only [`SampleSet`].

use crate::config::FeeLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Upstream field carrying the suggested max fee per gas
pub const SUGGESTED_MAX_FEE: &str = "suggestedMaxFeePerGas";
/// Upstream field carrying the estimated base fee
pub const BASE_FEE: &str = "estimatedBaseFee";
/// Upstream field carrying the suggested max priority fee per gas
pub const PRIORITY_FEE: &str = "suggestedMaxPriorityFeePerGas";

/// The upstream response did not have the expected shape.
///
/// Never retried: a malformed payload is not expected to heal on the next
/// attempt a second later.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataShapeError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("response is not a JSON object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field {field} is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },
    #[error("field {field} is negative: {value}")]
    Negative { field: &'static str, value: f64 },
}

/// One fee sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    captured_at: DateTime<Utc>,
    suggested_max_fee: f64,
    base_fee: Option<f64>,
    priority_fee: Option<f64>,
}

impl Reading {
    /// Build a reading, rejecting negative or non-finite fee components
    pub fn new(
        captured_at: DateTime<Utc>,
        suggested_max_fee: f64,
        base_fee: Option<f64>,
        priority_fee: Option<f64>,
    ) -> Result<Self, DataShapeError> {
        check_fee(SUGGESTED_MAX_FEE, suggested_max_fee)?;
        if let Some(fee) = base_fee {
            check_fee(BASE_FEE, fee)?;
        }
        if let Some(fee) = priority_fee {
            check_fee(PRIORITY_FEE, fee)?;
        }

        Ok(Self {
            captured_at,
            suggested_max_fee,
            base_fee,
            priority_fee,
        })
    }

    /// Parse an upstream quote body.
    ///
    /// Each field is looked up at the top level first, then inside the
    /// object for the configured fee `level` (`low`/`medium`/`high`).
    /// Values may be JSON numbers or numeric strings. An absent or `null`
    /// optional field yields `None`; anything else that is not a
    /// non-negative number is a [`DataShapeError`].
    pub fn parse_quote(
        body: &str,
        level: FeeLevel,
        captured_at: DateTime<Utc>,
    ) -> Result<Self, DataShapeError> {
        let json: Value =
            serde_json::from_str(body).map_err(|e| DataShapeError::InvalidJson(e.to_string()))?;
        let root = json.as_object().ok_or(DataShapeError::NotAnObject)?;
        let tier = root.get(level.key()).and_then(Value::as_object);

        let suggested = lookup(root, tier, SUGGESTED_MAX_FEE)
            .ok_or(DataShapeError::MissingField(SUGGESTED_MAX_FEE))?;
        let suggested = fee_value(SUGGESTED_MAX_FEE, suggested)?;

        let base = lookup(root, tier, BASE_FEE)
            .map(|v| fee_value(BASE_FEE, v))
            .transpose()?;
        let priority = lookup(root, tier, PRIORITY_FEE)
            .map(|v| fee_value(PRIORITY_FEE, v))
            .transpose()?;

        Self::new(captured_at, suggested, base, priority)
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn suggested_max_fee(&self) -> f64 {
        self.suggested_max_fee
    }

    pub fn base_fee(&self) -> Option<f64> {
        self.base_fee
    }

    pub fn priority_fee(&self) -> Option<f64> {
        self.priority_fee
    }
}

fn check_fee(field: &'static str, value: f64) -> Result<(), DataShapeError> {
    if !value.is_finite() {
        return Err(DataShapeError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(DataShapeError::Negative { field, value });
    }
    Ok(())
}

fn lookup<'a>(
    root: &'a Map<String, Value>,
    tier: Option<&'a Map<String, Value>>,
    field: &str,
) -> Option<&'a Value> {
    root.get(field)
        .filter(|v| !v.is_null())
        .or_else(|| tier.and_then(|t| t.get(field)).filter(|v| !v.is_null()))
}

fn fee_value(field: &'static str, value: &Value) -> Result<f64, DataShapeError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| DataShapeError::NotNumeric {
            field,
            value: value.to_string(),
        })
}

/// Ordered, append-only sequence of baseline readings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleSet {
    readings: Vec<Reading>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to the end of the set
    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Suggested max fee of every reading, in collection order
    pub fn suggested_fees(&self) -> Vec<f64> {
        self.readings.iter().map(Reading::suggested_max_fee).collect()
    }
}

impl FromIterator<Reading> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.iter()
    }
}

#[cfg(test)]
#[path = "reading_tests.rs"]
mod tests;
