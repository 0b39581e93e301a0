// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, snapshot builders, and date helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `glucoscore`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use glucoscore::models::DailyActivitySnapshot;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A day in March 2025
pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// UTC timestamp in March 2025
pub fn march_at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap()
}

/// Snapshot with only glucose readings
pub fn readings(values: &[f64]) -> DailyActivitySnapshot {
    DailyActivitySnapshot::with_readings(values.to_vec())
}

/// Two in-range readings, nothing else: 40 records XP + 30 in-range XP
pub fn minimum_day() -> DailyActivitySnapshot {
    readings(&[110.0, 145.0])
}
