// ABOUTME: Re-exports command modules for glucoscore
// ABOUTME: Provides access to score, level, stats, and streak commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

pub mod level;
pub mod score;
pub mod stats;
pub mod streak;
