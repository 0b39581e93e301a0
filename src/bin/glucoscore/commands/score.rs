// ABOUTME: Score command for glucoscore
// ABOUTME: Loads a daily activity snapshot and prints the computed XP result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore::errors::AppResult;
use glucoscore::logging::ScoreLogger;
use glucoscore::models::DailyActivitySnapshot;
use glucoscore::{DailyScoreEngine, EngineConfig, ValidationMode};
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_daily_score, print_json, OutputFormat};
use crate::helpers::input::load_json;

type Result<T> = AppResult<T>;

/// Score one snapshot
pub fn run(input: Option<&Path>, format: OutputFormat, lenient: bool) -> Result<()> {
    let config = if lenient {
        EngineConfig::with_validation(ValidationMode::Lenient)
    } else {
        EngineConfig::from_env()
    };
    info!(validation = %config.validation, "Scoring daily snapshot");

    let snapshot: DailyActivitySnapshot = load_json(input)?;
    let result = DailyScoreEngine::new(config).compute(&snapshot)?;
    ScoreLogger::log_daily_score(&result);

    match format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Pretty => {
            display_daily_score(&result);
            Ok(())
        }
    }
}
