// ABOUTME: Snapshot validation applying the configured strict or lenient policy
// ABOUTME: Produces in-contract inputs for the scoring engine or a descriptive error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Input validation for daily activity snapshots.
//!
//! The scoring formulas assume non-negative counters and finite, non-negative
//! glucose values. A `NaN` reading would otherwise count as a record yet never
//! be in range, silently lowering the in-range bonus.

use crate::config::ValidationMode;
use glucoscore_core::errors::{AppError, AppResult};
use glucoscore_core::models::DailyActivitySnapshot;
use serde_json::json;
use tracing::warn;

/// Snapshot values that satisfy the engine's input contract
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSnapshot {
    /// Finite, non-negative glucose values
    pub readings: Vec<f64>,
    /// Whether sleep was logged
    pub sleep_logged: bool,
    /// Whether stress was logged
    pub stress_logged: bool,
    /// Non-negative streak length
    pub streak_days: u32,
    /// Non-negative lifetime XP before today
    pub accumulated_xp: u64,
}

/// Check a snapshot against the input contract
///
/// # Errors
///
/// In [`ValidationMode::Strict`], returns `ValueOutOfRange` for a negative
/// `streakDays` or `accumulatedXPBeforeToday` or a `streakDays` above
/// `u32::MAX`, and `InvalidInput` for a glucose value that is non-finite or
/// negative. [`ValidationMode::Lenient`] never fails.
pub fn validate_snapshot(
    snapshot: &DailyActivitySnapshot,
    mode: ValidationMode,
) -> AppResult<ValidatedSnapshot> {
    let streak_days = validate_counter(snapshot.streak_days, "streakDays", mode)?;
    let streak_days = validate_streak_length(streak_days, mode)?;
    let accumulated_xp = validate_counter(
        snapshot.accumulated_xp_before_today,
        "accumulatedXPBeforeToday",
        mode,
    )?;

    let mut readings = Vec::with_capacity(snapshot.glucose_reading_values.len());
    for (index, &value) in snapshot.glucose_reading_values.iter().enumerate() {
        if value.is_finite() && value >= 0.0 {
            readings.push(value);
            continue;
        }
        let field = format!("glucoseReadingValues[{index}]");
        match mode {
            ValidationMode::Strict => {
                return Err(AppError::invalid_input(format!(
                    "Glucose value {value} at index {index} must be a finite, non-negative number"
                ))
                .with_field(field)
                .with_details(json!({ "index": index })));
            }
            ValidationMode::Lenient => {
                warn!(field = %field, value, "Dropping unusable glucose value");
            }
        }
    }

    Ok(ValidatedSnapshot {
        readings,
        sleep_logged: snapshot.sleep_logged,
        stress_logged: snapshot.stress_logged,
        streak_days,
        accumulated_xp,
    })
}

fn validate_counter(value: i64, field: &'static str, mode: ValidationMode) -> AppResult<u64> {
    if let Ok(valid) = u64::try_from(value) {
        return Ok(valid);
    }
    match mode {
        ValidationMode::Strict => Err(AppError::value_out_of_range(format!(
            "{field} must be non-negative, got {value}"
        ))
        .with_field(field)
        .with_details(json!({ "value": value }))),
        ValidationMode::Lenient => {
            warn!(field, value, "Clamping negative counter to zero");
            Ok(0)
        }
    }
}

fn validate_streak_length(days: u64, mode: ValidationMode) -> AppResult<u32> {
    if let Ok(valid) = u32::try_from(days) {
        return Ok(valid);
    }
    match mode {
        ValidationMode::Strict => Err(AppError::value_out_of_range(format!(
            "streakDays must be at most {}, got {days}",
            u32::MAX
        ))
        .with_field("streakDays")
        .with_details(json!({ "value": days, "max": u32::MAX }))),
        ValidationMode::Lenient => {
            warn!(field = "streakDays", value = days, "Capping oversized streak");
            Ok(u32::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glucoscore_core::errors::ErrorCode;

    #[test]
    fn test_strict_rejects_negative_streak() {
        let snapshot = DailyActivitySnapshot::default().streak_days(-1);
        let err = validate_snapshot(&snapshot, ValidationMode::Strict).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.field.as_deref(), Some("streakDays"));
    }

    #[test]
    fn test_lenient_drops_nan_and_clamps() {
        let snapshot = DailyActivitySnapshot::with_readings(vec![100.0, f64::NAN, -5.0, 150.0])
            .streak_days(-4)
            .accumulated_xp(-10);
        let validated = validate_snapshot(&snapshot, ValidationMode::Lenient).unwrap();
        assert_eq!(validated.readings, vec![100.0, 150.0]);
        assert_eq!(validated.streak_days, 0);
        assert_eq!(validated.accumulated_xp, 0);
    }

    #[test]
    fn test_strict_names_offending_index() {
        let snapshot = DailyActivitySnapshot::with_readings(vec![90.0, f64::INFINITY]);
        let err = validate_snapshot(&snapshot, ValidationMode::Strict).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(
            err.context.field.as_deref(),
            Some("glucoseReadingValues[1]")
        );
    }
}
