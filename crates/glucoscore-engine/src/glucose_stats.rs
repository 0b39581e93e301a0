// ABOUTME: Descriptive statistics over a set of glucose readings
// ABOUTME: Average, extremes, and low/in-range/high distribution with unrounded percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore_core::constants::glucose;
use glucoscore_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Position of a reading relative to the target range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseRange {
    /// Below 70 mg/dL
    Low,
    /// 70-180 mg/dL inclusive
    InRange,
    /// Above 180 mg/dL
    High,
}

impl GlucoseRange {
    /// Classify a single reading
    #[must_use]
    pub fn classify(value_mg_dl: f64) -> Self {
        if value_mg_dl < glucose::IN_RANGE_LOW_MG_DL {
            Self::Low
        } else if value_mg_dl > glucose::IN_RANGE_HIGH_MG_DL {
            Self::High
        } else {
            Self::InRange
        }
    }
}

/// Summary of a day's (or any window's) glucose readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlucoseStats {
    /// Number of readings
    pub count: usize,
    /// Mean value (mg/dL)
    pub average: f64,
    /// Lowest value (mg/dL)
    pub min: f64,
    /// Highest value (mg/dL)
    pub max: f64,
    /// Readings within 70-180 mg/dL
    pub in_range_count: usize,
    /// Readings below 70 mg/dL
    pub below_range_count: usize,
    /// Readings above 180 mg/dL
    pub above_range_count: usize,
    /// Share of readings in range, unrounded (0-100)
    pub in_range_percent: f64,
}

impl GlucoseStats {
    /// Compute statistics; `None` when there are no readings
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any value is non-finite or negative, the same
    /// values strict snapshot validation rejects
    pub fn from_readings(values: &[f64]) -> AppResult<Option<Self>> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(AppError::invalid_input(format!(
                "Glucose value {value} at index {index} must be a finite, non-negative number"
            ))
            .with_field(format!("readings[{index}]")));
        }
        if values.is_empty() {
            return Ok(None);
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut in_range_count = 0;
        let mut below_range_count = 0;
        let mut above_range_count = 0;
        for &value in values {
            match GlucoseRange::classify(value) {
                GlucoseRange::Low => below_range_count += 1,
                GlucoseRange::InRange => in_range_count += 1,
                GlucoseRange::High => above_range_count += 1,
            }
        }

        Ok(Some(Self {
            count,
            average: sum / count as f64,
            min,
            max,
            in_range_count,
            below_range_count,
            above_range_count,
            in_range_percent: in_range_count as f64 * 100.0 / count as f64,
        }))
    }
}
