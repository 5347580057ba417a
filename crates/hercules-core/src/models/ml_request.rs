// ABOUTME: Recommendation request payload and response envelope
// ABOUTME: MlRequestProfile is derived from a ProfileRecord for each recommendation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Normalized profile sent to the external recommendation service
///
/// `weight_kg` and `height_cm` carry whatever the unit parser returns for the
/// stored values. Stored weight is pounds and no conversion is applied, so
/// `weight_kg` is numerically pounds; the name is kept because the external
/// service reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlRequestProfile {
    /// Display name, empty when unknown
    pub username: String,
    /// Age in whole years
    pub age: i64,
    /// Stored weight re-parsed by the weight parser (pounds, see type docs)
    pub weight_kg: Option<f64>,
    /// Stored height re-parsed by the height parser (centimeters)
    pub height_cm: Option<f64>,
    /// Lower-cased gender
    pub gender: String,
    /// Goal in the service vocabulary
    pub goal: String,
    /// Experience in the service vocabulary
    pub experience: String,
    /// Equipment access in the service vocabulary
    pub equipment_access: String,
    /// Diet preference
    pub diet_preference: String,
    /// Constant activity level
    pub activity_level: String,
    /// Constant weekly workout frequency
    pub workout_frequency: u32,
}

/// Combined meal and workout suggestion returned to the client
///
/// The bodies are opaque to this service and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Suggested meal
    pub meal: Option<serde_json::Value>,
    /// Suggested workout plan for today
    pub workout: Option<serde_json::Value>,
}
