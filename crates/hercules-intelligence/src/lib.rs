// ABOUTME: Profile intelligence engine for the Hercules fitness service
// ABOUTME: Pure, synchronous transforms between onboarding answers, profiles, and ML payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Hercules Intelligence
//!
//! Every function in this crate is a pure transformation over plain records:
//! no I/O, no shared state, safe to call from any number of tasks. Malformed
//! input is reported with sentinel values (`None`, `false`, a list of missing
//! labels) rather than errors; the only fallible operation is the
//! persistence guard in [`validation`].

/// Free-text height and weight parsing into centimeters and pounds
pub mod units;

/// Onboarding answers to profile record, and profile record to ML payload
pub mod profile_transformer;

/// Required-field checks gating recommendation requests
pub mod completeness;

/// Range checks applied before a profile is persisted
pub mod validation;

/// Weekly and daily aggregation over fitness logs
pub mod log_summary;

pub use completeness::{
    get_missing_fields, is_profile_complete_for_ml, ProfileReadiness, RequiredField,
    COMPLETE_PROFILE_FIRST,
};
pub use log_summary::{
    calculate_change, dashboard_summary, weekly_summary, Change, DashboardSummary, Direction,
};
pub use profile_transformer::{transform_onboarding_data, transform_profile, transform_profile_data};
pub use units::{parse_height, parse_height_input, parse_weight, parse_weight_input};
pub use validation::validate_profile_for_persistence;
