// ABOUTME: Core data models for the Glucoscore daily score
// ABOUTME: Re-exports snapshots, timestamped records, and XP result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! # Data Models
//!
//! All models are transient value types: they carry no identity and live only
//! as long as the computation that produced them. JSON field names follow the
//! camelCase shape the dashboard consumes (`glucoseReadingValues`, `finalXP`).
//!
//! ## Core Models
//!
//! - `DailyActivitySnapshot`: one day of raw activity, the engine's input
//! - `DailyXpResult`: the engine's output, with `XpBreakdown` and `LevelInfo`
//! - `DailyRecords`: timestamped records a snapshot is assembled from
//! - `DayActivity`: per-day record count used for streak calculation

mod records;
mod score;
mod snapshot;

pub use records::{DailyRecords, DayActivity, GlucoseReading, SleepLog, StressLog};
pub use score::{DailyXpResult, InRangeScore, LevelInfo, RecordsXp, XpBreakdown};
pub use snapshot::DailyActivitySnapshot;
