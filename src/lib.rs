// ABOUTME: Main library entry point for the Glucoscore platform
// ABOUTME: Re-exports core types and the scoring engine, and hosts logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![deny(unsafe_code)]

//! # Glucoscore
//!
//! A gamified daily score for diabetes self-management. Patients earn
//! experience points (XP) for logging glucose readings, keeping readings in the
//! 70-180 mg/dL target range, and logging sleep and stress. Consecutive active
//! days add a streak multiplier, and lifetime XP maps onto five levels.
//!
//! ## Architecture
//!
//! - **`glucoscore-core`**: errors, constants, and data models
//! - **`glucoscore-engine`**: the pure scoring engine, statistics, and streaks
//! - **this crate**: re-exports plus logging setup for the `glucoscore` CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use glucoscore::errors::AppResult;
//! use glucoscore::models::DailyActivitySnapshot;
//! use glucoscore::scoring::compute_daily_xp;
//!
//! # fn main() -> AppResult<()> {
//! let snapshot = DailyActivitySnapshot::with_readings(vec![110.0, 145.0]).sleep_logged(true);
//! let result = compute_daily_xp(&snapshot)?;
//! assert_eq!(result.final_xp, 75);
//! assert_eq!(result.level_info.title, "Principiante");
//! # Ok(())
//! # }
//! ```

/// Structured logging configuration
pub mod logging;

pub use glucoscore_core::{constants, errors, models};
pub use glucoscore_engine::{
    config, glucose_stats, levels, scoring, snapshot_builder, streak, validation,
};

pub use glucoscore_engine::{compute_daily_xp, DailyScoreEngine, EngineConfig, ValidationMode};
