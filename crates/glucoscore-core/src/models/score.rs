// ABOUTME: XP scoring result types produced by the daily score engine
// ABOUTME: DailyXpResult, XpBreakdown, LevelInfo, and per-component intermediate scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use serde::{Deserialize, Serialize};

/// XP awarded for the number of glucose records logged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsXp {
    /// First and second record awards
    #[serde(rename = "baseXP")]
    pub base_xp: u64,
    /// Awards for records beyond the minimum
    #[serde(rename = "extraXP")]
    pub extra_xp: u64,
    /// `base_xp + extra_xp`
    pub total: u64,
}

/// Share of readings in the target range and the XP it earns
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InRangeScore {
    /// Percentage of readings in range, unrounded (0-100)
    pub in_range_percent: f64,
    /// Rounded XP for the in-range share
    #[serde(rename = "inRangeXP")]
    pub in_range_xp: u64,
}

/// Named XP components before the streak multiplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpBreakdown {
    /// `base_records_xp + extra_records_xp`
    #[serde(rename = "recordsXP")]
    pub records_xp: u64,
    /// First and second record awards
    #[serde(rename = "baseRecordsXP")]
    pub base_records_xp: u64,
    /// Awards for records beyond the minimum
    #[serde(rename = "extraRecordsXP")]
    pub extra_records_xp: u64,
    /// In-range bonus
    #[serde(rename = "inRangeXP")]
    pub in_range_xp: u64,
    /// Sleep and stress logging bonus
    #[serde(rename = "wellnessXP")]
    pub wellness_xp: u64,
}

impl XpBreakdown {
    /// Sum of all components
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.records_xp
            .saturating_add(self.in_range_xp)
            .saturating_add(self.wellness_xp)
    }
}

/// Position within the level table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    /// Tier number (1-5)
    pub level: u8,
    /// Display title of the tier
    pub title: String,
    /// XP earned inside the current tier
    #[serde(rename = "currentLevelXP")]
    pub current_level_xp: u64,
    /// Width of the current tier in XP
    pub next_level_threshold: u64,
    /// Progress through the tier, clamped to 0-100
    pub progress_percent: f64,
}

/// Full outcome of scoring one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyXpResult {
    /// Breakdown total before the streak multiplier
    #[serde(rename = "baseXP")]
    pub base_xp: u64,
    /// `base_xp` scaled by the streak multiplier, rounded
    #[serde(rename = "finalXP")]
    pub final_xp: u64,
    /// Component values
    pub breakdown: XpBreakdown,
    /// Streak length used for the multiplier
    pub streak_days: u32,
    /// `1 + streak_days * 0.03`
    pub streak_multiplier: f64,
    /// Glucose records counted today
    pub records_completed: u32,
    /// Records needed for the completion bonus
    pub min_required_records: u32,
    /// `records_completed >= min_required_records`
    pub has_min_records: bool,
    /// In-range share as a whole percentage
    pub in_range_percent: u32,
    /// Whether sleep was logged
    pub has_sleep_logged: bool,
    /// Whether stress was logged
    pub has_stress_logged: bool,
    /// Level reached after adding today's award
    pub level_info: LevelInfo,
    /// Reference ceiling for display; not enforced
    #[serde(rename = "maxDailyXP")]
    pub max_daily_xp: u64,
}
