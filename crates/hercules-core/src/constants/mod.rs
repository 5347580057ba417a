// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, profile bounds, and ML payload defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Application constants grouped by domain rather than kept in a single file.

/// Unit conversion and measurement constants
pub mod units;

/// Valid ranges for persisted profile fields
pub mod profile_limits {
    /// Youngest accepted age (years)
    pub const MIN_AGE: i64 = 13;
    /// Oldest accepted age (years)
    pub const MAX_AGE: i64 = 120;
    /// Shortest accepted height (centimeters)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest accepted height (centimeters)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Lightest accepted weight (pounds)
    pub const MIN_WEIGHT_LBS: f64 = 30.0;
    /// Heaviest accepted weight (pounds)
    pub const MAX_WEIGHT_LBS: f64 = 500.0;
}

/// Fallbacks and constants for the recommendation request payload
pub mod ml_defaults {
    /// Age used when the stored profile has none
    pub const DEFAULT_AGE: i64 = 25;
    /// Gender used when the stored profile has none
    pub const DEFAULT_GENDER: &str = "male";
    /// Goal used when the stored value is not in the goal vocabulary
    pub const DEFAULT_GOAL: &str = "maintain";
    /// Experience used when the stored value is not in the experience vocabulary
    pub const DEFAULT_EXPERIENCE: &str = "beginner";
    /// Equipment access used when the stored value is not in the equipment vocabulary
    pub const DEFAULT_EQUIPMENT_ACCESS: &str = "full_gym";
    /// Diet preference used when the stored profile has none
    pub const DEFAULT_DIET_PREFERENCE: &str = "all";
    /// Activity level sent with every request
    pub const ACTIVITY_LEVEL: &str = "moderate";
    /// Weekly workout frequency sent with every request
    pub const WORKOUT_FREQUENCY: u32 = 3;
    /// Default number of meal recommendations
    pub const DEFAULT_MEAL_COUNT: u32 = 5;
    /// Default number of exercise recommendations
    pub const DEFAULT_EXERCISE_COUNT: u32 = 8;
    /// Default number of similar users
    pub const DEFAULT_SIMILAR_USER_COUNT: u32 = 5;
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default recommendation service base URL
    pub const DEFAULT_ML_API_URL: &str = "http://localhost:5001/api";
    /// Default request timeout for the recommendation service (seconds)
    pub const DEFAULT_ML_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout for the recommendation service (seconds)
    pub const DEFAULT_ML_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default allowed CORS origin (the web client dev server)
    pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
}

/// Service names used in structured logs
pub mod service_names {
    /// HTTP server
    pub const HERCULES_SERVER: &str = "hercules-server";
    /// Recommendation service label used in error messages
    pub const ML_API: &str = "ML API";
}
