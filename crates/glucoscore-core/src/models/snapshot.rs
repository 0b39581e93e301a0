// ABOUTME: Daily activity snapshot consumed by the scoring engine
// ABOUTME: Raw per-day inputs supplied by the caller after querying storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use serde::{Deserialize, Serialize};

/// One day of raw health-tracking activity.
///
/// Integer fields are signed so that out-of-contract values coming from JSON
/// reach validation instead of failing deserialization with an opaque message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivitySnapshot {
    /// Glucose measurements (mg/dL) recorded today; order is irrelevant
    #[serde(default)]
    pub glucose_reading_values: Vec<f64>,
    /// Whether a sleep record exists for today
    #[serde(default)]
    pub sleep_logged: bool,
    /// Whether a stress record exists for today
    #[serde(default)]
    pub stress_logged: bool,
    /// Consecutive qualifying days, computed by the caller
    #[serde(default)]
    pub streak_days: i64,
    /// Lifetime XP total before today's award
    #[serde(default, rename = "accumulatedXPBeforeToday")]
    pub accumulated_xp_before_today: i64,
}

impl DailyActivitySnapshot {
    /// Snapshot with today's glucose readings and everything else empty
    #[must_use]
    pub fn with_readings(values: impl Into<Vec<f64>>) -> Self {
        Self {
            glucose_reading_values: values.into(),
            ..Self::default()
        }
    }

    /// Set the sleep flag
    #[must_use]
    pub fn sleep_logged(mut self, logged: bool) -> Self {
        self.sleep_logged = logged;
        self
    }

    /// Set the stress flag
    #[must_use]
    pub fn stress_logged(mut self, logged: bool) -> Self {
        self.stress_logged = logged;
        self
    }

    /// Set the streak length
    #[must_use]
    pub fn streak_days(mut self, days: i64) -> Self {
        self.streak_days = days;
        self
    }

    /// Set lifetime XP before today
    #[must_use]
    pub fn accumulated_xp(mut self, xp: i64) -> Self {
        self.accumulated_xp_before_today = xp;
        self
    }
}
