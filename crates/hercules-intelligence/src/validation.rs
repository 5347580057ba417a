// ABOUTME: Submission checks applied to a mapped profile before it is persisted
// ABOUTME: Returns the first failing rule as an AppError with a user-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hercules_core::constants::profile_limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_LBS, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_LBS,
};
use hercules_core::errors::{AppError, AppResult};
use hercules_core::models::ProfileRecord;
use std::ops::RangeInclusive;

const AGE_MESSAGE: &str = "Valid age is required (13-120)";
const HEIGHT_MESSAGE: &str = "Valid height is required (100-250 cm)";
const WEIGHT_MESSAGE: &str = "Valid weight is required (30-500 lbs)";

/// Check a mapped onboarding profile before it is written
///
/// Rules run in a fixed order (goal, gender, age, height, weight, diet
/// preference) and the first failure wins. An absent value fails with
/// `MissingRequiredField`, a value outside its bounds with `ValueOutOfRange`.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_profile_for_persistence(profile: &ProfileRecord) -> AppResult<()> {
    require_text(profile.goal.as_deref(), "Goal is required")?;
    require_text(profile.gender.as_deref(), "Gender is required")?;
    require_in_range(profile.age, &(MIN_AGE..=MAX_AGE), AGE_MESSAGE)?;
    require_in_range(profile.height, &(MIN_HEIGHT_CM..=MAX_HEIGHT_CM), HEIGHT_MESSAGE)?;
    require_in_range(profile.weight, &(MIN_WEIGHT_LBS..=MAX_WEIGHT_LBS), WEIGHT_MESSAGE)?;
    require_text(profile.diet_preference.as_deref(), "Diet preference is required")?;
    Ok(())
}

fn require_text(value: Option<&str>, message: &str) -> AppResult<()> {
    match value {
        Some(text) if !text.is_empty() => Ok(()),
        _ => Err(AppError::missing_field(message)),
    }
}

fn require_in_range<T: PartialOrd>(
    value: Option<T>,
    range: &RangeInclusive<T>,
    message: &str,
) -> AppResult<()> {
    match value {
        None => Err(AppError::missing_field(message)),
        Some(value) if range.contains(&value) => Ok(()),
        Some(_) => Err(AppError::out_of_range(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hercules_core::errors::ErrorCode;

    fn valid_profile() -> ProfileRecord {
        ProfileRecord {
            goal: Some("bulk".into()),
            gender: Some("male".into()),
            age: Some(30),
            height: Some(182.88),
            weight: Some(200.0),
            diet_preference: Some("vegan".into()),
            ..ProfileRecord::new("user-1")
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile_for_persistence(&valid_profile()).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let profile = ProfileRecord {
            age: Some(13),
            height: Some(250.0),
            weight: Some(30.0),
            ..valid_profile()
        };

        assert!(validate_profile_for_persistence(&profile).is_ok());
    }

    #[test]
    fn test_missing_goal_reported_first() {
        let profile = ProfileRecord {
            goal: None,
            age: Some(5),
            ..valid_profile()
        };

        let error = validate_profile_for_persistence(&profile).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Goal is required");
    }

    #[test]
    fn test_age_out_of_range() {
        let profile = ProfileRecord {
            age: Some(121),
            ..valid_profile()
        };

        let error = validate_profile_for_persistence(&profile).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "Valid age is required (13-120)");
    }

    #[test]
    fn test_unparsed_height_is_missing() {
        let profile = ProfileRecord {
            height: None,
            ..valid_profile()
        };

        let error = validate_profile_for_persistence(&profile).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.message, "Valid height is required (100-250 cm)");
    }

    #[test]
    fn test_weight_out_of_range() {
        let profile = ProfileRecord {
            weight: Some(900.0),
            ..valid_profile()
        };

        let error = validate_profile_for_persistence(&profile).unwrap_err();
        assert_eq!(error.message, "Valid weight is required (30-500 lbs)");
    }

    #[test]
    fn test_empty_diet_preference() {
        let profile = ProfileRecord {
            diet_preference: Some(String::new()),
            ..valid_profile()
        };

        let error = validate_profile_for_persistence(&profile).unwrap_err();
        assert_eq!(error.message, "Diet preference is required");
    }
}
