// ABOUTME: Configuration module for glucoscore-engine crate
// ABOUTME: Re-exports engine configuration and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

/// Engine settings loaded from the environment
pub mod engine;
/// Configuration error types
pub mod error;

pub use engine::{EngineConfig, ValidationMode};
pub use error::ConfigError;
