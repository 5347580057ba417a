// ABOUTME: Unit conversion constants for body measurements and log windows
// ABOUTME: Provides named constants to eliminate magic numbers in unit parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Days per week
pub const DAYS_PER_WEEK: f64 = 7.0;
