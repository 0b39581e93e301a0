// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates format parsing, environment loading, and single global initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use glucoscore::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "glucoscore");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_from_env_reads_format_and_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env().with_level("debug");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert!(config.include_location);
    assert_eq!(config.level, "debug");
}

#[test]
#[serial]
fn test_init_succeeds_once() {
    let config = LoggingConfig::default().with_level("warn");
    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
