// ABOUTME: Integration tests for streak calculation
// ABOUTME: Covers current and longest streaks, unfinished days, and timezone grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::FixedOffset;
use common::{march, march_at};
use glucoscore::models::{DayActivity, GlucoseReading};
use glucoscore::streak::StreakCalculator;

fn day(day: u32, records: u32) -> DayActivity {
    DayActivity::new(march(day), records)
}

#[test]
fn test_no_history_has_no_streak() {
    let summary = StreakCalculator::summarize(&[], march(10));
    assert_eq!(summary.current_streak, 0);
    assert_eq!(summary.longest_streak, 0);
    assert_eq!(summary.qualifying_days, 0);
    assert!(!summary.today_qualifies);
}

#[test]
fn test_current_streak_includes_qualifying_today() {
    let days = [day(7, 2), day(8, 4), day(9, 2), day(10, 3)];
    assert_eq!(StreakCalculator::current_streak(&days, march(10)), 4);
}

#[test]
fn test_gap_resets_current_streak() {
    let days = [day(5, 3), day(6, 3), day(8, 2), day(9, 2), day(10, 2)];
    let summary = StreakCalculator::summarize(&days, march(10));
    assert_eq!(summary.current_streak, 3);
    assert_eq!(summary.longest_streak, 3);
    assert_eq!(summary.qualifying_days, 5);
}

#[test]
fn test_single_record_day_breaks_streak() {
    let days = [day(7, 2), day(8, 1), day(9, 2), day(10, 2)];
    assert_eq!(StreakCalculator::current_streak(&days, march(10)), 2);
}

#[test]
fn test_missed_yesterday_and_unfinished_today() {
    let days = [day(7, 2), day(8, 2), day(10, 1)];
    assert_eq!(StreakCalculator::current_streak(&days, march(10)), 0);
}

#[test]
fn test_future_days_are_ignored() {
    let days = [day(9, 2), day(10, 2), day(11, 5), day(12, 5)];
    let summary = StreakCalculator::summarize(&days, march(10));
    assert_eq!(summary.current_streak, 2);
    assert_eq!(summary.qualifying_days, 2);
}

#[test]
fn test_longest_streak_over_full_history() {
    let days = [
        day(1, 2),
        day(2, 2),
        day(3, 2),
        day(4, 2),
        day(6, 2),
        day(9, 3),
        day(10, 3),
    ];
    assert_eq!(StreakCalculator::longest_streak(&days), 4);
}

#[test]
fn test_days_from_readings_groups_by_local_date() {
    // 23:30 UTC on the 9th is 01:30 on the 10th at UTC+2
    let readings = [
        GlucoseReading {
            value_mg_dl: 120.0,
            recorded_at: march_at(9, 8, 0),
        },
        GlucoseReading {
            value_mg_dl: 130.0,
            recorded_at: march_at(9, 23, 30),
        },
        GlucoseReading {
            value_mg_dl: 140.0,
            recorded_at: march_at(10, 7, 15),
        },
    ];

    let utc = StreakCalculator::days_from_readings(&readings, FixedOffset::east_opt(0).unwrap());
    assert_eq!(utc, vec![day(9, 2), day(10, 1)]);

    let plus_two =
        StreakCalculator::days_from_readings(&readings, FixedOffset::east_opt(2 * 3600).unwrap());
    assert_eq!(plus_two, vec![day(9, 1), day(10, 2)]);
}
