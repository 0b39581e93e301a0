// ABOUTME: Output formatting helpers for glucoscore
// ABOUTME: Prints command results as JSON or as a human-readable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use clap::ValueEnum;
use glucoscore::constants::{LevelTier, LEVEL_TIERS};
use glucoscore::errors::AppResult;
use glucoscore::glucose_stats::GlucoseStats;
use glucoscore::models::{DailyXpResult, LevelInfo};
use glucoscore::streak::StreakSummary;
use serde::Serialize;
use std::io::{self, Write};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable summary
    Pretty,
}

/// One row of the level table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRow {
    /// Level number (1-5)
    pub level: u8,
    /// Display title
    pub title: &'static str,
    /// Lowest lifetime XP in the tier
    #[serde(rename = "minXP")]
    pub min_xp: u64,
    /// Highest lifetime XP in the tier; `None` for the top tier
    #[serde(rename = "maxXP")]
    pub max_xp: Option<u64>,
}

impl From<&LevelTier> for TierRow {
    fn from(tier: &LevelTier) -> Self {
        Self {
            level: tier.level,
            title: tier.title,
            min_xp: tier.min_xp,
            max_xp: tier.max_xp,
        }
    }
}

/// Write any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Display a daily score breakdown
pub fn display_daily_score(result: &DailyXpResult) {
    let breakdown = &result.breakdown;
    println!("\nDaily XP: {}", result.final_xp);
    println!("{}", "=".repeat(40));
    println!(
        "   Records:   {} XP ({} base + {} extra)",
        breakdown.records_xp, breakdown.base_records_xp, breakdown.extra_records_xp
    );
    println!(
        "   In range:  {} XP ({}% of readings)",
        breakdown.in_range_xp, result.in_range_percent
    );
    println!("   Wellness:  {} XP", breakdown.wellness_xp);
    println!("   Base:      {} XP", result.base_xp);
    println!(
        "   Streak:    {} days (x{:.2})",
        result.streak_days, result.streak_multiplier
    );
    println!(
        "   Records logged: {}/{}{}",
        result.records_completed,
        result.min_required_records,
        if result.has_min_records {
            ""
        } else {
            " (below minimum)"
        }
    );
    println!(
        "   Sleep logged: {}  Stress logged: {}",
        yes_no(result.has_sleep_logged),
        yes_no(result.has_stress_logged)
    );
    println!("   Daily reference maximum: {} XP", result.max_daily_xp);
    display_level_info(&result.level_info);
}

/// Display a level readout
pub fn display_level_info(info: &LevelInfo) {
    println!("\nLevel {}: {}", info.level, info.title);
    println!(
        "   Progress: {}/{} XP ({:.1}%)",
        info.current_level_xp, info.next_level_threshold, info.progress_percent
    );
}

/// Display the level table
pub fn display_level_table() {
    println!("\nLevels");
    println!("{}", "=".repeat(40));
    for tier in &LEVEL_TIERS {
        let range = tier.max_xp.map_or_else(
            || format!("{}+", tier.min_xp),
            |max| format!("{}-{max}", tier.min_xp),
        );
        println!("   {}. {:<22} {range} XP", tier.level, tier.title);
    }
}

/// Level table rows for JSON output
pub fn level_table_rows() -> Vec<TierRow> {
    LEVEL_TIERS.iter().map(TierRow::from).collect()
}

/// Display glucose statistics
pub fn display_glucose_stats(stats: Option<&GlucoseStats>) {
    let Some(stats) = stats else {
        println!("\nNo glucose readings");
        return;
    };
    println!("\nGlucose summary ({} readings)", stats.count);
    println!("{}", "=".repeat(40));
    println!("   Average: {:.1} mg/dL", stats.average);
    println!("   Min/Max: {:.0}/{:.0} mg/dL", stats.min, stats.max);
    println!(
        "   In range: {} ({:.1}%)",
        stats.in_range_count, stats.in_range_percent
    );
    println!("   Below range: {}", stats.below_range_count);
    println!("   Above range: {}", stats.above_range_count);
}

/// Display a streak summary
pub fn display_streak(summary: &StreakSummary) {
    println!("\nCurrent streak: {} days", summary.current_streak);
    println!("   Longest streak: {} days", summary.longest_streak);
    println!("   Qualifying days: {}", summary.qualifying_days);
    println!("   Today qualifies: {}", yes_no(summary.today_qualifies));
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
