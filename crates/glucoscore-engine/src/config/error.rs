// ABOUTME: Configuration error types for engine settings validation
// ABOUTME: Defines error variants for unreadable variables and unknown option values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

//! Configuration error types for engine settings.

use glucoscore_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Value parsed but not one of the accepted options
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// Rejected value
        value: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
