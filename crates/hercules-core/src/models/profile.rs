// ABOUTME: Persisted, user-scoped fitness profile record
// ABOUTME: Enumerated attributes are stored as plain strings; body stats in cm and lbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A user's persisted fitness attributes
///
/// Owned by the persistence collaborator; keyed one-to-one by `user_id`.
/// Range invariants (age 13-120, height 100-250 cm, weight 30-500 lbs) are
/// enforced before a write, not by this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Owning user identifier
    pub user_id: String,
    /// Display name chosen at signup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Fitness goal
    #[serde(default)]
    pub goal: Option<String>,
    /// Gender
    #[serde(default)]
    pub gender: Option<String>,
    /// Age in whole years
    #[serde(default)]
    pub age: Option<i64>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in pounds
    #[serde(default)]
    pub weight: Option<f64>,
    /// Equipment access
    #[serde(default)]
    pub gym_access: Option<String>,
    /// Training experience
    #[serde(default)]
    pub experience: Option<String>,
    /// Diet preference
    #[serde(default)]
    pub diet_preference: Option<String>,
    /// Nut allergy flag
    #[serde(default)]
    pub nut_allergy: bool,
    /// Dairy allergy flag
    #[serde(default)]
    pub dairy_allergy: bool,
    /// Whether onboarding has been submitted
    #[serde(default)]
    pub onboarding_completed: bool,
}

impl ProfileRecord {
    /// Empty profile row for a freshly signed-up user
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Copy of `self` with every field that `updates` sets written over it
    ///
    /// Absent optional fields in `updates` leave the stored value untouched;
    /// flags are always taken from `updates`.
    #[must_use]
    pub fn merged_with(&self, updates: &Self) -> Self {
        Self {
            user_id: self.user_id.clone(),
            username: updates.username.clone().or_else(|| self.username.clone()),
            goal: updates.goal.clone().or_else(|| self.goal.clone()),
            gender: updates.gender.clone().or_else(|| self.gender.clone()),
            age: updates.age.or(self.age),
            height: updates.height.or(self.height),
            weight: updates.weight.or(self.weight),
            gym_access: updates.gym_access.clone().or_else(|| self.gym_access.clone()),
            experience: updates.experience.clone().or_else(|| self.experience.clone()),
            diet_preference: updates
                .diet_preference
                .clone()
                .or_else(|| self.diet_preference.clone()),
            nut_allergy: updates.nut_allergy,
            dairy_allergy: updates.dairy_allergy,
            onboarding_completed: updates.onboarding_completed,
        }
    }
}
