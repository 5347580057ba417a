// ABOUTME: Profile commands for hercules-cli
// ABOUTME: Normalizes answers, maps them to profile rows, and checks ML readiness from JSON files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::input::read_json_file;
use crate::helpers::output::print_json;
use crate::Result;
use hercules_server::errors::AppError;
use hercules_server::intelligence::{
    get_missing_fields, is_profile_complete_for_ml, transform_onboarding_data,
    transform_profile, transform_profile_data, validate_profile_for_persistence,
    ProfileReadiness,
};
use hercules_server::models::{OnboardingAnswers, ProfileRecord};
use std::path::Path;
use tracing::info;

/// Print the normalized questionnaire
pub fn normalize(file: &Path) -> Result<()> {
    let answers: OnboardingAnswers = read_json_file(file)?;
    print_json(&transform_onboarding_data(&answers))
}

/// Print the profile row the answers would be stored as
pub fn onboard(file: &Path, user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::invalid_input("User id must not be empty"));
    }

    let answers: OnboardingAnswers = read_json_file(file)?;
    let record = transform_profile_data(&answers, user_id);
    validate_profile_for_persistence(&record)?;

    info!(user.id = %user_id, "Profile row validated");
    print_json(&record)
}

/// Print completeness and missing field labels
pub fn readiness(file: &Path) -> Result<()> {
    let profile: ProfileRecord = read_json_file(file)?;
    print_json(&ProfileReadiness::evaluate(Some(&profile)))
}

/// Print the recommendation payload, rejecting incomplete profiles
pub fn ml_payload(file: &Path) -> Result<()> {
    let profile: ProfileRecord = read_json_file(file)?;

    if !is_profile_complete_for_ml(Some(&profile)) {
        return Err(AppError::profile_incomplete(&get_missing_fields(Some(
            &profile,
        ))));
    }

    print_json(&transform_profile(&profile))
}
