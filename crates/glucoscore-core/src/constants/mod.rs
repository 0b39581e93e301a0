// ABOUTME: Constants module with domain-separated organization
// ABOUTME: XP awards, glucose target range, level tiers, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Constants module
//!
//! Scoring constants are fixed configuration: callers never supply them.
//! They are grouped by the sub-calculation that consumes them.

/// Level tier table
pub mod levels;

pub use levels::{LevelTier, LEVEL_TIERS, OPEN_TIER_WIDTH_XP};

/// XP awards for logged glucose records
pub mod records {
    /// Records needed to earn the completion bonus
    pub const MIN_REQUIRED_RECORDS: u32 = 2;
    /// Awarded once at least one reading is logged
    pub const FIRST_RECORD_XP: u64 = 20;
    /// Awarded once at least two readings are logged
    pub const SECOND_RECORD_XP: u64 = 20;
    /// Awarded per reading beyond `MIN_REQUIRED_RECORDS`
    pub const EXTRA_RECORD_XP: u64 = 5;
}

/// Glucose target range and the XP tied to it
pub mod glucose {
    /// Inclusive lower bound of the target range (mg/dL)
    pub const IN_RANGE_LOW_MG_DL: f64 = 70.0;
    /// Inclusive upper bound of the target range (mg/dL)
    pub const IN_RANGE_HIGH_MG_DL: f64 = 180.0;
    /// XP awarded when every reading is in range
    pub const IN_RANGE_MAX_XP: u64 = 30;
}

/// Flat wellness bonuses
pub mod wellness {
    /// Awarded when a sleep record exists for the day
    pub const SLEEP_LOG_XP: u64 = 5;
    /// Awarded when a stress record exists for the day
    pub const STRESS_LOG_XP: u64 = 5;
}

/// Streak bonus
pub mod streak {
    /// Multiplier increment per consecutive streak day (+3%)
    pub const MULTIPLIER_PER_DAY: f64 = 0.03;
}

/// Daily reference ceiling: the sum of every capped component.
///
/// Reported alongside each result for display. Never enforced: extra records
/// and the streak multiplier can push a day past it.
pub const MAX_DAILY_XP: u64 = records::FIRST_RECORD_XP
    + records::SECOND_RECORD_XP
    + glucose::IN_RANGE_MAX_XP
    + wellness::SLEEP_LOG_XP
    + wellness::STRESS_LOG_XP;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const GLUCOSCORE_CLI: &str = "glucoscore";
}

/// Environment variable names
pub mod env_config {
    /// Validation policy for caller input (`strict` or `lenient`)
    pub const VALIDATION_MODE: &str = "GLUCOSCORE_VALIDATION_MODE";
}
