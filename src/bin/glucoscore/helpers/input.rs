// ABOUTME: Input loading for glucoscore commands
// ABOUTME: Reads JSON documents from a file path or stdin and deserializes them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Glucoscore Contributors

use glucoscore::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read the raw input document; `None` or `-` means stdin
pub fn read_source(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "Reading input file");
            fs::read_to_string(path).map_err(|e| {
                AppError::from(e).with_field(path.display().to_string())
            })
        }
        _ => {
            debug!("Reading input from stdin");
            Ok(io::read_to_string(io::stdin())?)
        }
    }
}

/// Read and deserialize a JSON document
pub fn load_json<T: DeserializeOwned>(path: Option<&Path>) -> AppResult<T> {
    let raw = read_source(path)?;
    if raw.trim().is_empty() {
        return Err(AppError::invalid_format("Input is empty, expected a JSON document"));
    }
    Ok(serde_json::from_str(&raw)?)
}
