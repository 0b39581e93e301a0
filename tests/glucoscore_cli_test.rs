// ABOUTME: End-to-end tests for the glucoscore command-line tool
// ABOUTME: Runs the compiled binary against files and stdin and checks stdout, stderr, and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn glucoscore() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_glucoscore"));
    command
        .env_remove("GLUCOSCORE_VALIDATION_MODE")
        .env("RUST_LOG", "error");
    command
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = glucoscore()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn stderr_error(output: &Output) -> Value {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .rev()
        .find(|line| line.starts_with("{\"error\""))
        .unwrap_or_else(|| panic!("no error envelope in stderr: {stderr}"));
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_score_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("today.json");
    fs::write(
        &path,
        r#"{"glucoseReadingValues":[110,145],"sleepLogged":true,"streakDays":0,"accumulatedXPBeforeToday":0}"#,
    )
    .unwrap();

    let output = glucoscore()
        .args(["score", "--input"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["finalXP"], 75);
    assert_eq!(result["breakdown"]["recordsXP"], 40);
    assert_eq!(result["levelInfo"]["title"], "Principiante");
}

#[test]
fn test_score_from_stdin_with_missing_fields() {
    let output = run_with_stdin(&["score"], r#"{"glucoseReadingValues":[100,50,200]}"#);
    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["breakdown"]["inRangeXP"], 10);
    assert_eq!(result["inRangePercent"], 33);
}

#[test]
fn test_negative_streak_fails_in_strict_mode() {
    let output = run_with_stdin(&["score", "-i", "-"], r#"{"streakDays":-1}"#);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let error = stderr_error(&output);
    assert_eq!(error["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert_eq!(error["error"]["field"], "streakDays");
}

#[test]
fn test_lenient_flag_clamps_negative_streak() {
    let output = run_with_stdin(
        &["score", "--lenient"],
        r#"{"glucoseReadingValues":[110,145],"streakDays":-1}"#,
    );
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["finalXP"], 70);
}

#[test]
fn test_malformed_input_reports_invalid_format() {
    let output = run_with_stdin(&["score"], "{not json");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_error(&output)["error"]["code"], "INVALID_FORMAT");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = glucoscore()
        .args(["score", "--input"])
        .arg(dir.path().join("absent.json"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_error(&output)["error"]["code"], "STORAGE_ERROR");
}

#[test]
fn test_level_command() {
    let output = glucoscore()
        .args(["level", "--total-xp", "300"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let info = stdout_json(&output);
    assert_eq!(info["level"], 2);
    assert_eq!(info["title"], "En Progreso");
    assert_eq!(info["currentLevelXP"], 0);
}

#[test]
fn test_levels_command_lists_all_tiers() {
    let output = glucoscore()
        .args(["levels", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tiers = stdout_json(&output);
    assert_eq!(tiers.as_array().unwrap().len(), 5);
    assert_eq!(tiers[4]["maxXP"], Value::Null);

    let pretty = glucoscore().arg("levels").output().unwrap();
    assert!(String::from_utf8_lossy(&pretty.stdout).contains("Maestro del Control"));
}

#[test]
fn test_stats_command() {
    let output = run_with_stdin(&["stats"], "[60, 100, 140, 200]");
    assert!(output.status.success());
    let stats = stdout_json(&output);
    assert_eq!(stats["count"], 4);
    assert_eq!(stats["inRangeCount"], 2);

    let empty = run_with_stdin(&["stats"], "[]");
    assert!(empty.status.success());
    assert_eq!(stdout_json(&empty), Value::Null);
}

#[test]
fn test_streak_command() {
    let days = r#"[
        {"date":"2025-03-08","recordsCompleted":2},
        {"date":"2025-03-09","recordsCompleted":3},
        {"date":"2025-03-10","recordsCompleted":1}
    ]"#;
    let output = run_with_stdin(&["streak", "--today", "2025-03-10"], days);
    assert!(output.status.success());
    let summary = stdout_json(&output);
    assert_eq!(summary["currentStreak"], 2);
    assert_eq!(summary["todayQualifies"], false);
}

#[test]
fn test_pretty_score_output() {
    let output = run_with_stdin(
        &["score", "--format", "pretty"],
        r#"{"glucoseReadingValues":[110,145],"stressLogged":true}"#,
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Daily XP: 75"));
    assert!(stdout.contains("Level 1: Principiante"));
}
