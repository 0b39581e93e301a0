// ABOUTME: Daily score engine converting a day's activity into XP and a level readout
// ABOUTME: Records, in-range, wellness, and streak sub-calculations with one entry point
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Daily Score Engine
//!
//! Converts a [`DailyActivitySnapshot`] into a [`DailyXpResult`]:
//!
//! 1. **Records XP**: 20 for the first reading, 20 for the second, 5 per extra
//! 2. **In-range XP**: up to 30, proportional to readings within 70-180 mg/dL
//! 3. **Wellness XP**: 5 each for logging sleep and stress
//! 4. **Streak multiplier**: +3% per streak day, applied once to the sum
//!
//! The engine owns no state and performs no I/O; identical snapshots always
//! produce identical results.

use crate::config::EngineConfig;
use crate::levels::calculate_level_info;
use crate::validation::validate_snapshot;
use glucoscore_core::constants::{glucose, records, streak, wellness, MAX_DAILY_XP};
use glucoscore_core::errors::AppResult;
use glucoscore_core::models::{
    DailyActivitySnapshot, DailyXpResult, InRangeScore, RecordsXp, XpBreakdown,
};
use tracing::debug;

/// XP for the number of glucose records logged today.
///
/// Extra records beyond the minimum are uncapped.
#[must_use]
pub fn calculate_records_xp(records_completed: u32) -> RecordsXp {
    if records_completed == 0 {
        return RecordsXp::default();
    }

    let mut base_xp = records::FIRST_RECORD_XP;
    if records_completed >= 2 {
        base_xp += records::SECOND_RECORD_XP;
    }
    let extra_records = records_completed.saturating_sub(records::MIN_REQUIRED_RECORDS);
    let extra_xp = u64::from(extra_records) * records::EXTRA_RECORD_XP;

    RecordsXp {
        base_xp,
        extra_xp,
        total: base_xp + extra_xp,
    }
}

/// Whether a glucose value lies in the inclusive target range
#[must_use]
pub fn is_in_range(value_mg_dl: f64) -> bool {
    (glucose::IN_RANGE_LOW_MG_DL..=glucose::IN_RANGE_HIGH_MG_DL).contains(&value_mg_dl)
}

/// In-range share of today's readings and the XP it earns.
///
/// Non-finite values never count as in range.
#[must_use]
pub fn calculate_in_range_xp(values: &[f64]) -> InRangeScore {
    if values.is_empty() {
        return InRangeScore::default();
    }

    let in_range_count = values.iter().filter(|&&v| is_in_range(v)).count();
    let in_range_percent = in_range_count as f64 * 100.0 / values.len() as f64;
    let in_range_xp =
        (in_range_percent / 100.0 * glucose::IN_RANGE_MAX_XP as f64).round() as u64;

    InRangeScore {
        in_range_percent,
        in_range_xp,
    }
}

/// Flat bonus for logging sleep and stress
#[must_use]
pub const fn calculate_wellness_xp(sleep_logged: bool, stress_logged: bool) -> u64 {
    let mut xp = 0;
    if sleep_logged {
        xp += wellness::SLEEP_LOG_XP;
    }
    if stress_logged {
        xp += wellness::STRESS_LOG_XP;
    }
    xp
}

/// `1 + streak_days * 0.03`; never below 1
#[must_use]
#[allow(clippy::suboptimal_flops)] // must match the dashboard bit for bit
pub fn streak_multiplier(streak_days: u32) -> f64 {
    1.0 + f64::from(streak_days) * streak::MULTIPLIER_PER_DAY
}

/// Scale the pre-multiplier total and round once
#[must_use]
pub fn apply_streak_multiplier(base_xp: u64, multiplier: f64) -> u64 {
    (base_xp as f64 * multiplier).round() as u64
}

/// Daily score engine with a fixed validation policy
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyScoreEngine {
    config: EngineConfig,
}

impl DailyScoreEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one day of activity
    ///
    /// # Errors
    ///
    /// Returns a validation error when the snapshot violates the input
    /// contract and the engine runs in strict mode
    pub fn compute(&self, snapshot: &DailyActivitySnapshot) -> AppResult<DailyXpResult> {
        let input = validate_snapshot(snapshot, self.config.validation)?;

        let records_completed = u32::try_from(input.readings.len()).unwrap_or(u32::MAX);
        let records_xp = calculate_records_xp(records_completed);
        let in_range = calculate_in_range_xp(&input.readings);
        let wellness_xp = calculate_wellness_xp(input.sleep_logged, input.stress_logged);

        let breakdown = XpBreakdown {
            records_xp: records_xp.total,
            base_records_xp: records_xp.base_xp,
            extra_records_xp: records_xp.extra_xp,
            in_range_xp: in_range.in_range_xp,
            wellness_xp,
        };

        let base_xp = breakdown.total();
        let multiplier = streak_multiplier(input.streak_days);
        let final_xp = apply_streak_multiplier(base_xp, multiplier);
        let total_xp = input.accumulated_xp.saturating_add(final_xp);
        let level_info = calculate_level_info(total_xp);

        debug!(
            records_completed,
            base_xp,
            final_xp,
            streak_days = input.streak_days,
            multiplier,
            total_xp,
            level = level_info.level,
            "Computed daily XP"
        );

        Ok(DailyXpResult {
            base_xp,
            final_xp,
            breakdown,
            streak_days: input.streak_days,
            streak_multiplier: multiplier,
            records_completed,
            min_required_records: records::MIN_REQUIRED_RECORDS,
            has_min_records: records_completed >= records::MIN_REQUIRED_RECORDS,
            in_range_percent: in_range.in_range_percent.round() as u32,
            has_sleep_logged: input.sleep_logged,
            has_stress_logged: input.stress_logged,
            level_info,
            max_daily_xp: MAX_DAILY_XP,
        })
    }
}

/// Score one day of activity with the default (strict) configuration
///
/// # Errors
///
/// Returns a validation error for a negative streak or XP total, or for a
/// non-finite or negative glucose value
pub fn compute_daily_xp(snapshot: &DailyActivitySnapshot) -> AppResult<DailyXpResult> {
    DailyScoreEngine::default().compute(snapshot)
}
