// ABOUTME: Streak calculation over per-day glucose record counts
// ABOUTME: Current and longest runs of consecutive days meeting the minimum record count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Streak Calculator
//!
//! A day qualifies when it has at least `MIN_REQUIRED_RECORDS` glucose records.
//! The current streak counts back from today; while today is still short of the
//! minimum, counting starts at yesterday so an unfinished day never breaks it.

use chrono::{FixedOffset, NaiveDate};
use glucoscore_core::constants::records::MIN_REQUIRED_RECORDS;
use glucoscore_core::models::{DayActivity, GlucoseReading};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current and longest streak for one patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Consecutive qualifying days ending today (or yesterday)
    pub current_streak: u32,
    /// Longest run of consecutive qualifying days on record
    pub longest_streak: u32,
    /// Total qualifying days on record
    pub qualifying_days: u32,
    /// Whether today already qualifies
    pub today_qualifies: bool,
}

/// Streak calculator
pub struct StreakCalculator;

impl StreakCalculator {
    /// Whether a day's record count meets the minimum
    #[must_use]
    pub const fn qualifies(records_completed: u32) -> bool {
        records_completed >= MIN_REQUIRED_RECORDS
    }

    /// Consecutive qualifying days ending at `today`.
    ///
    /// Entries sharing a date are summed; dates after `today` are ignored.
    #[must_use]
    pub fn current_streak(days: &[DayActivity], today: NaiveDate) -> u32 {
        let qualifying = Self::qualifying_dates(days, Some(today));
        Self::count_back_from(&qualifying, today)
    }

    /// Longest run of consecutive qualifying days
    #[must_use]
    pub fn longest_streak(days: &[DayActivity]) -> u32 {
        let qualifying = Self::qualifying_dates(days, None);
        Self::longest_run(&qualifying)
    }

    /// Current streak, longest streak, and totals in one pass over the input
    #[must_use]
    pub fn summarize(days: &[DayActivity], today: NaiveDate) -> StreakSummary {
        let qualifying = Self::qualifying_dates(days, Some(today));
        StreakSummary {
            current_streak: Self::count_back_from(&qualifying, today),
            longest_streak: Self::longest_run(&qualifying),
            qualifying_days: u32::try_from(qualifying.len()).unwrap_or(u32::MAX),
            today_qualifies: qualifying.contains(&today),
        }
    }

    /// Group glucose readings into per-day record counts in a local timezone
    #[must_use]
    pub fn days_from_readings(readings: &[GlucoseReading], offset: FixedOffset) -> Vec<DayActivity> {
        let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for reading in readings {
            let date = reading.recorded_at.with_timezone(&offset).date_naive();
            let count = counts.entry(date).or_insert(0);
            *count = count.saturating_add(1);
        }
        counts
            .into_iter()
            .map(|(date, records_completed)| DayActivity::new(date, records_completed))
            .collect()
    }

    fn qualifying_dates(days: &[DayActivity], until: Option<NaiveDate>) -> BTreeSet<NaiveDate> {
        let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for day in days {
            if until.is_some_and(|last| day.date > last) {
                continue;
            }
            let total = per_day.entry(day.date).or_insert(0);
            *total = total.saturating_add(day.records_completed);
        }
        per_day
            .into_iter()
            .filter(|&(_, records)| Self::qualifies(records))
            .map(|(date, _)| date)
            .collect()
    }

    fn count_back_from(qualifying: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        let start = if qualifying.contains(&today) {
            Some(today)
        } else {
            today.pred_opt()
        };

        let mut streak = 0_u32;
        let mut cursor = start;
        while let Some(date) = cursor {
            if !qualifying.contains(&date) {
                break;
            }
            streak += 1;
            cursor = date.pred_opt();
        }
        streak
    }

    fn longest_run(qualifying: &BTreeSet<NaiveDate>) -> u32 {
        let mut longest = 0_u32;
        let mut run = 0_u32;
        let mut previous: Option<NaiveDate> = None;
        for &date in qualifying {
            run = match previous.and_then(|p| p.succ_opt()) {
                Some(expected) if expected == date => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(date);
        }
        longest
    }
}
