// ABOUTME: Level commands for glucoscore
// ABOUTME: Shows the readout for one XP total or the full level table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore::errors::AppResult;
use glucoscore::levels::calculate_level_info;

use crate::helpers::display::{
    display_level_info, display_level_table, level_table_rows, print_json, OutputFormat,
};

type Result<T> = AppResult<T>;

/// Level readout for a lifetime XP total
pub fn show(total_xp: u64, format: OutputFormat) -> Result<()> {
    let info = calculate_level_info(total_xp);
    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Pretty => {
            display_level_info(&info);
            Ok(())
        }
    }
}

/// All level tiers
pub fn list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&level_table_rows()),
        OutputFormat::Pretty => {
            display_level_table();
            Ok(())
        }
    }
}
