// ABOUTME: Assembles a daily activity snapshot from timestamped health records
// ABOUTME: Filters records to one local calendar day and attaches streak and XP totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use glucoscore_core::models::{DailyActivitySnapshot, DailyRecords};
use tracing::debug;

/// Builds the engine input for one local calendar day
#[derive(Debug, Clone, Copy)]
pub struct SnapshotBuilder {
    day: NaiveDate,
    offset: FixedOffset,
    streak_days: i64,
    accumulated_xp: i64,
}

impl SnapshotBuilder {
    /// Builder for `day`, interpreted in UTC until [`Self::utc_offset`] is set
    #[must_use]
    pub fn new(day: NaiveDate) -> Self {
        Self {
            day,
            offset: Utc.fix(),
            streak_days: 0,
            accumulated_xp: 0,
        }
    }

    /// Patient's local UTC offset, used to decide which day a record falls on
    #[must_use]
    pub const fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Streak length computed by the caller
    #[must_use]
    pub const fn streak_days(mut self, days: i64) -> Self {
        self.streak_days = days;
        self
    }

    /// Lifetime XP before the scored day
    #[must_use]
    pub const fn accumulated_xp(mut self, xp: i64) -> Self {
        self.accumulated_xp = xp;
        self
    }

    /// Day being assembled
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    fn is_on_day(&self, at: &DateTime<Utc>) -> bool {
        at.with_timezone(&self.offset).date_naive() == self.day
    }

    /// Assemble the snapshot, keeping only records from the builder's day
    #[must_use]
    pub fn build(&self, records: &DailyRecords) -> DailyActivitySnapshot {
        let glucose_reading_values: Vec<f64> = records
            .glucose
            .iter()
            .filter(|reading| self.is_on_day(&reading.recorded_at))
            .map(|reading| reading.value_mg_dl)
            .collect();
        let sleep_logged = records
            .sleep
            .iter()
            .any(|log| self.is_on_day(&log.recorded_at));
        let stress_logged = records
            .stress
            .iter()
            .any(|log| self.is_on_day(&log.recorded_at));

        debug!(
            day = %self.day,
            readings = glucose_reading_values.len(),
            skipped = records.glucose.len() - glucose_reading_values.len(),
            sleep_logged,
            stress_logged,
            "Assembled daily snapshot"
        );

        DailyActivitySnapshot {
            glucose_reading_values,
            sleep_logged,
            stress_logged,
            streak_days: self.streak_days,
            accumulated_xp_before_today: self.accumulated_xp,
        }
    }
}
