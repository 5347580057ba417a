// ABOUTME: Unit parsing commands for hercules-cli
// ABOUTME: Prints the parsed measurement, or null when the unit cannot be determined
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::output::print_json_value;
use hercules_server::intelligence;
use serde_json::json;

/// Print `{"input", "height_cm"}`
pub fn parse_height(value: &str) {
    let height_cm = intelligence::parse_height(Some(value));
    print_json_value(&json!({ "input": value, "height_cm": height_cm }));
}

/// Print `{"input", "weight_lbs"}`
pub fn parse_weight(value: &str) {
    let weight_lbs = intelligence::parse_weight(Some(value));
    print_json_value(&json!({ "input": value, "weight_lbs": weight_lbs }));
}
