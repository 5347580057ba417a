// ABOUTME: Maps onboarding answers to persisted profiles and profiles to ML request payloads
// ABOUTME: Vocabulary mapping tables sit between stored enums and the recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile mapper
//!
//! Both directions work on copies; the input record is never modified.
//! Range validation is not done here, see [`crate::validation`].

use crate::units::{parse_age, parse_height, parse_height_input, parse_weight, parse_weight_input};
use hercules_core::constants::ml_defaults::{
    ACTIVITY_LEVEL, DEFAULT_AGE, DEFAULT_DIET_PREFERENCE, DEFAULT_EQUIPMENT_ACCESS,
    DEFAULT_EXPERIENCE, DEFAULT_GENDER, DEFAULT_GOAL, WORKOUT_FREQUENCY,
};
use hercules_core::models::{
    AgeInput, MlRequestProfile, OnboardingAnswers, OnboardingStats, ProfileRecord, UnitInput,
};
use tracing::debug;

/// Stored goal → recommendation service goal
///
/// Identity today; a vocabulary change on either side is an edit to this table.
pub const GOAL_MAPPING: &[(&str, &str)] =
    &[("bulk", "bulk"), ("cut", "cut"), ("maintain", "maintain")];

/// Stored experience → recommendation service experience
pub const EXPERIENCE_MAPPING: &[(&str, &str)] = &[
    ("beginner", "beginner"),
    ("intermediate", "intermediate"),
    ("advanced", "advanced"),
];

/// Stored gym access → recommendation service equipment access
pub const EQUIPMENT_MAPPING: &[(&str, &str)] = &[
    ("full_gym", "full_gym"),
    ("limited_equipment", "limited_equipment"),
    ("bodyweight_only", "bodyweight_only"),
];

fn lookup(table: &[(&str, &'static str)], value: Option<&str>, fallback: &'static str) -> &'static str {
    value
        .and_then(|value| {
            table
                .iter()
                .find(|(stored, _)| *stored == value)
                .map(|(_, mapped)| *mapped)
        })
        .unwrap_or(fallback)
}

/// Goal in the recommendation vocabulary, `"maintain"` when unrecognized
#[must_use]
pub fn map_goal(goal: Option<&str>) -> &'static str {
    lookup(GOAL_MAPPING, goal, DEFAULT_GOAL)
}

/// Experience in the recommendation vocabulary, `"beginner"` when unrecognized
#[must_use]
pub fn map_experience(experience: Option<&str>) -> &'static str {
    lookup(EXPERIENCE_MAPPING, experience, DEFAULT_EXPERIENCE)
}

/// Equipment access in the recommendation vocabulary, `"full_gym"` when unrecognized
#[must_use]
pub fn map_gym_access(gym_access: Option<&str>) -> &'static str {
    lookup(EQUIPMENT_MAPPING, gym_access, DEFAULT_EQUIPMENT_ACCESS)
}

/// Lower-cased gender, `"male"` when absent or empty
#[must_use]
pub fn map_gender(gender: Option<&str>) -> String {
    gender
        .filter(|gender| !gender.is_empty())
        .map_or_else(|| DEFAULT_GENDER.to_owned(), str::to_lowercase)
}

/// Build the persisted profile record from onboarding answers
///
/// Height and weight go through the unit parser, age is read as whole years,
/// and the record is marked as having completed onboarding. Unparseable
/// measurements come back as `None`; the caller decides whether to reject
/// the write.
///
/// # Examples
///
/// ```rust
/// use hercules_core::models::OnboardingAnswers;
/// use hercules_intelligence::transform_profile_data;
///
/// let answers: OnboardingAnswers = serde_json::from_value(serde_json::json!({
///     "goal": "bulk",
///     "stats": {"gender": "male", "age": "30", "height": "6'0\"", "weight": "200"},
///     "gym": "home",
///     "experience": "advanced",
///     "diet": {"diet": "vegan", "allergies": {"nut": true, "dairy": false}}
/// })).unwrap();
///
/// let record = transform_profile_data(&answers, "user-123");
/// assert_eq!(record.age, Some(30));
/// assert_eq!(record.weight, Some(200.0));
/// assert!(record.nut_allergy);
/// assert!(record.onboarding_completed);
/// ```
#[must_use]
pub fn transform_profile_data(answers: &OnboardingAnswers, user_id: &str) -> ProfileRecord {
    let stats = answers.stats.as_ref();
    let diet = answers.diet.as_ref();
    let allergies = diet.and_then(|diet| diet.allergies);

    let record = ProfileRecord {
        user_id: user_id.to_owned(),
        username: None,
        goal: answers.goal.clone(),
        gender: stats.and_then(|stats| stats.gender.clone()),
        age: stats.and_then(|stats| stats.age.as_ref()).and_then(parse_age),
        height: stats
            .and_then(|stats| stats.height.as_ref())
            .and_then(parse_height_input),
        weight: stats
            .and_then(|stats| stats.weight.as_ref())
            .and_then(parse_weight_input),
        gym_access: answers.gym.clone(),
        experience: answers.experience.clone(),
        diet_preference: diet
            .and_then(|diet| diet.diet.clone())
            .filter(|preference| !preference.is_empty()),
        nut_allergy: allergies.and_then(|flags| flags.nut).unwrap_or(false),
        dairy_allergy: allergies.and_then(|flags| flags.dairy).unwrap_or(false),
        onboarding_completed: true,
    };

    debug!(
        user.id = %user_id,
        height.parsed = record.height.is_some(),
        weight.parsed = record.weight.is_some(),
        age.parsed = record.age.is_some(),
        "Mapped onboarding answers to profile record"
    );

    record
}

/// Copy of the answers with parseable stats replaced by canonical numbers
///
/// Height becomes centimeters, weight becomes pounds, age becomes whole
/// years. Values that do not parse are left exactly as typed.
#[must_use]
pub fn transform_onboarding_data(answers: &OnboardingAnswers) -> OnboardingAnswers {
    let mut transformed = answers.clone();

    if let Some(stats) = transformed.stats.as_mut() {
        normalize_stats(stats);
    }

    transformed
}

fn normalize_stats(stats: &mut OnboardingStats) {
    if let Some(height_cm) = stats.height.as_ref().and_then(parse_height_input) {
        stats.height = Some(UnitInput::Value(serde_json::json!(height_cm)));
    }

    if let Some(weight_lbs) = stats.weight.as_ref().and_then(parse_weight_input) {
        stats.weight = Some(UnitInput::Value(serde_json::json!(weight_lbs)));
    }

    // Safe: ages are small whole numbers
    if let Some(years) = stats.age.as_ref().and_then(parse_age) {
        stats.age = Some(AgeInput::Number(years as f64));
    }
}

/// Build the recommendation request payload from a stored profile
///
/// Stored height and weight are rendered as text and fed back through the
/// unit parser. A bare number is read as centimeters and pounds
/// respectively, so the values pass through unchanged: `weight_kg` carries
/// pounds. This is the payload the recommendation service has always
/// received and is kept as-is.
#[must_use]
pub fn transform_profile(profile: &ProfileRecord) -> MlRequestProfile {
    let weight_text = profile.weight.map(|weight| weight.to_string());
    let height_text = profile.height.map(|height| height.to_string());

    MlRequestProfile {
        username: profile.username.clone().unwrap_or_default(),
        age: profile.age.filter(|age| *age != 0).unwrap_or(DEFAULT_AGE),
        weight_kg: parse_weight(weight_text.as_deref()),
        height_cm: parse_height(height_text.as_deref()),
        gender: map_gender(profile.gender.as_deref()),
        goal: map_goal(profile.goal.as_deref()).to_owned(),
        experience: map_experience(profile.experience.as_deref()).to_owned(),
        equipment_access: map_gym_access(profile.gym_access.as_deref()).to_owned(),
        diet_preference: profile
            .diet_preference
            .as_deref()
            .filter(|preference| !preference.is_empty())
            .unwrap_or(DEFAULT_DIET_PREFERENCE)
            .to_owned(),
        activity_level: ACTIVITY_LEVEL.to_owned(),
        workout_frequency: WORKOUT_FREQUENCY,
    }
}
