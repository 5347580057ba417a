// ABOUTME: Output formatting helpers for hercules-cli
// ABOUTME: Prints pretty JSON to stdout so results can be piped into other tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::Result;
use serde::Serialize;
use serde_json::Value;

/// Pretty-print any serializable value
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pretty-print a JSON value that is already built
pub fn print_json_value(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}
