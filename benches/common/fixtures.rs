// ABOUTME: Benchmark fixtures for generating realistic glucose logging data
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Benchmark fixtures for generating realistic glucose logging data.
//!
//! Values cycle through a fixed pattern so every run scores identical input.

use chrono::{Duration, NaiveDate};
use glucoscore::models::{DailyActivitySnapshot, DayActivity};

/// Predefined reading counts for a single day
#[derive(Debug, Clone, Copy)]
pub enum ReadingVolume {
    /// Fingerstick patient (4 readings)
    Fingerstick,
    /// Continuous monitor at 5-minute intervals (288 readings)
    Cgm,
}

impl ReadingVolume {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Fingerstick => 4,
            Self::Cgm => 288,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fingerstick => "fingerstick",
            Self::Cgm => "cgm",
        }
    }
}

const READING_PATTERN: [f64; 8] = [95.0, 142.0, 188.0, 121.0, 64.0, 110.0, 176.0, 203.0];

/// Deterministic glucose values (mg/dL), mixing in-range and out-of-range
#[must_use]
pub fn generate_readings(count: usize) -> Vec<f64> {
    READING_PATTERN.iter().copied().cycle().take(count).collect()
}

/// A fully logged day with a two-week streak
#[must_use]
pub fn generate_snapshot(volume: ReadingVolume) -> DailyActivitySnapshot {
    DailyActivitySnapshot::with_readings(generate_readings(volume.count()))
        .sleep_logged(true)
        .stress_logged(true)
        .streak_days(14)
        .accumulated_xp(740)
}

/// Per-day record counts ending at `today`, with a missed day every 17 days
#[must_use]
pub fn generate_history(today: NaiveDate, days: i64) -> Vec<DayActivity> {
    (0..days)
        .map(|offset| {
            let records = if offset % 17 == 16 { 1 } else { 3 };
            DayActivity::new(today - Duration::days(offset), records)
        })
        .collect()
}
