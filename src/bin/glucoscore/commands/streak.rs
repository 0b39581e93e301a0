// ABOUTME: Streak command for glucoscore
// ABOUTME: Computes current and longest streaks from per-day record counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use chrono::{NaiveDate, Utc};
use glucoscore::errors::AppResult;
use glucoscore::models::DayActivity;
use glucoscore::streak::StreakCalculator;
use std::path::Path;
use tracing::debug;

use crate::helpers::display::{display_streak, print_json, OutputFormat};
use crate::helpers::input::load_json;

type Result<T> = AppResult<T>;

/// Streak summary counted back from `today`
pub fn run(input: Option<&Path>, today: Option<NaiveDate>, format: OutputFormat) -> Result<()> {
    let days: Vec<DayActivity> = load_json(input)?;
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    debug!(days = days.len(), %today, "Computing streak");

    let summary = StreakCalculator::summarize(&days, today);
    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Pretty => {
            display_streak(&summary);
            Ok(())
        }
    }
}
