// ABOUTME: Stats command for glucoscore
// ABOUTME: Summarizes an array of glucose readings against the target range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore::errors::AppResult;
use glucoscore::glucose_stats::GlucoseStats;
use std::path::Path;

use crate::helpers::display::{display_glucose_stats, print_json, OutputFormat};
use crate::helpers::input::load_json;

type Result<T> = AppResult<T>;

/// Glucose statistics; prints `null` (JSON) when there are no readings
pub fn run(input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let readings: Vec<f64> = load_json(input)?;
    let stats = GlucoseStats::from_readings(&readings)?;
    match format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Pretty => {
            display_glucose_stats(stats.as_ref());
            Ok(())
        }
    }
}
