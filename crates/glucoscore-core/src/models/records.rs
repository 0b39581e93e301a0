// ABOUTME: Timestamped health records logged by a patient
// ABOUTME: GlucoseReading, SleepLog, StressLog, per-day record sets, and streak inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single glucose measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlucoseReading {
    /// Measured value in mg/dL
    pub value_mg_dl: f64,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
}

/// A sleep record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepLog {
    /// When the record was logged
    pub recorded_at: DateTime<Utc>,
    /// Hours slept, if the patient entered them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

/// A stress record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressLog {
    /// When the record was logged
    pub recorded_at: DateTime<Utc>,
    /// Self-reported stress level, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

/// Records fetched from storage for a window that includes the scored day.
///
/// May contain neighbouring days; the snapshot builder filters by local date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecords {
    /// Glucose measurements
    #[serde(default)]
    pub glucose: Vec<GlucoseReading>,
    /// Sleep records
    #[serde(default)]
    pub sleep: Vec<SleepLog>,
    /// Stress records
    #[serde(default)]
    pub stress: Vec<StressLog>,
}

/// Number of glucose records completed on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// Local calendar date
    pub date: NaiveDate,
    /// Glucose records logged that day
    pub records_completed: u32,
}

impl DayActivity {
    /// Create a day entry
    #[must_use]
    pub const fn new(date: NaiveDate, records_completed: u32) -> Self {
        Self {
            date,
            records_completed,
        }
    }
}
