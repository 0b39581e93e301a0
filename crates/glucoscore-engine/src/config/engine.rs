// ABOUTME: Engine configuration loaded from environment variables
// ABOUTME: Selects the validation policy applied to caller-supplied snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use super::error::ConfigError;
use glucoscore_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// How out-of-contract snapshot values are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject negative counters and non-finite or negative glucose values
    #[default]
    Strict,
    /// Clamp negative counters to zero and drop unusable glucose values
    Lenient,
}

impl ValidationMode {
    /// Name used in configuration and logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" | "clamp" => Ok(Self::Lenient),
            _ => Err(ConfigError::InvalidValue {
                name: env_config::VALIDATION_MODE,
                value: s.to_owned(),
            }),
        }
    }
}

/// Daily score engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Validation policy for snapshot input
    pub validation: ValidationMode,
}

impl EngineConfig {
    /// Configuration with an explicit validation mode
    #[must_use]
    pub const fn with_validation(validation: ValidationMode) -> Self {
        Self { validation }
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but not valid unicode or
    /// names an unknown option
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let validation = match env::var(env_config::VALIDATION_MODE) {
            Ok(value) => value.parse()?,
            Err(env::VarError::NotPresent) => ValidationMode::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { validation })
    }

    /// Load configuration from environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring invalid engine configuration, using defaults");
            Self::default()
        })
    }
}
