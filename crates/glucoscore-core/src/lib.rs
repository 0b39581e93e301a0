// ABOUTME: Core types and constants for the Glucoscore daily scoring platform
// ABOUTME: Foundation crate with error handling, XP constants, level tiers, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

#![deny(unsafe_code)]

//! # Glucoscore Core
//!
//! Foundation crate providing shared types and constants for the Glucoscore
//! diabetes self-management score. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: XP awards, glucose target range, and the level tier table
//! - **models**: Daily activity snapshots, timestamped records, and score results

/// Unified error handling system with standard error codes
pub mod errors;

/// Scoring constants organized by domain
pub mod constants;

/// Core data models (snapshots, records, XP results)
pub mod models;
