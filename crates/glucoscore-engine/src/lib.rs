// ABOUTME: Daily score engine for the Glucoscore diabetes self-management platform
// ABOUTME: XP awards, streak multiplier, level progression, glucose statistics, and streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![deny(unsafe_code)]

//! # Glucoscore Engine
//!
//! Pure, synchronous scoring over a patient's daily activity. Nothing in this
//! crate performs I/O or holds mutable state, so every function is safe to call
//! from any number of threads at once.

/// Engine configuration (validation policy) and configuration errors
pub mod config;
/// Descriptive statistics over glucose readings
pub mod glucose_stats;
/// Level tier lookup and progress computation
pub mod levels;
/// XP sub-calculations and the daily score engine
pub mod scoring;
/// Snapshot assembly from timestamped records
pub mod snapshot_builder;
/// Current and longest streak calculation
pub mod streak;
/// Snapshot validation policies
pub mod validation;

pub use config::{ConfigError, EngineConfig, ValidationMode};
pub use glucose_stats::{GlucoseRange, GlucoseStats};
pub use levels::{calculate_level_info, tier_for};
pub use scoring::{
    apply_streak_multiplier, calculate_in_range_xp, calculate_records_xp, calculate_wellness_xp,
    compute_daily_xp, is_in_range, streak_multiplier, DailyScoreEngine,
};
pub use snapshot_builder::SnapshotBuilder;
pub use streak::{StreakCalculator, StreakSummary};
pub use validation::{validate_snapshot, ValidatedSnapshot};
