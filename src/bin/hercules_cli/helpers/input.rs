// ABOUTME: Input helpers for hercules-cli
// ABOUTME: Reads and decodes JSON documents from disk with path-bearing error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::Result;
use hercules_server::errors::AppError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read `path` and decode it as `T`
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", path.display()))
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid JSON in {}: {e}", path.display()))
    })
}
