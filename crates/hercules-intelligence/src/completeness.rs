// ABOUTME: Decides whether a stored profile carries everything recommendations need
// ABOUTME: Reports missing fields by human-readable label in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use hercules_core::models::ProfileRecord;
use serde::{Deserialize, Serialize};

/// Single entry reported when there is no profile at all
pub const COMPLETE_PROFILE_FIRST: &str = "Complete your profile";

/// Profile fields the recommendation service depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Fitness goal
    Goal,
    /// Training experience
    Experience,
    /// Equipment access
    GymAccess,
    /// Diet preference
    DietPreference,
    /// Age in years
    Age,
    /// Body weight
    Weight,
    /// Body height
    Height,
    /// Gender
    Gender,
}

impl RequiredField {
    /// Every required field, in reporting order
    pub const ALL: [Self; 8] = [
        Self::Goal,
        Self::Experience,
        Self::GymAccess,
        Self::DietPreference,
        Self::Age,
        Self::Weight,
        Self::Height,
        Self::Gender,
    ];

    /// Stored field name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Goal => "goal",
            Self::Experience => "experience",
            Self::GymAccess => "gym_access",
            Self::DietPreference => "diet_preference",
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Gender => "gender",
        }
    }

    /// Label shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Goal => "Fitness Goal",
            Self::Experience => "Experience Level",
            Self::GymAccess => "Gym Access",
            Self::DietPreference => "Diet Preference",
            Self::Age => "Age",
            Self::Weight => "Weight",
            Self::Height => "Height",
            Self::Gender => "Gender",
        }
    }

    /// Present means set and, for text, non-empty; numeric zero counts as present
    #[must_use]
    pub fn is_present_in(self, profile: &ProfileRecord) -> bool {
        fn text(value: Option<&String>) -> bool {
            value.is_some_and(|value| !value.is_empty())
        }

        match self {
            Self::Goal => text(profile.goal.as_ref()),
            Self::Experience => text(profile.experience.as_ref()),
            Self::GymAccess => text(profile.gym_access.as_ref()),
            Self::DietPreference => text(profile.diet_preference.as_ref()),
            Self::Age => profile.age.is_some(),
            Self::Weight => profile.weight.is_some(),
            Self::Height => profile.height.is_some(),
            Self::Gender => text(profile.gender.as_ref()),
        }
    }
}

/// True only when a profile exists and every required field is present
#[must_use]
pub fn is_profile_complete_for_ml(profile: Option<&ProfileRecord>) -> bool {
    profile.is_some_and(|profile| {
        RequiredField::ALL
            .iter()
            .all(|field| field.is_present_in(profile))
    })
}

/// Labels of the absent required fields, in order
///
/// A missing profile reports a single [`COMPLETE_PROFILE_FIRST`] entry.
#[must_use]
pub fn get_missing_fields(profile: Option<&ProfileRecord>) -> Vec<&'static str> {
    let Some(profile) = profile else {
        return vec![COMPLETE_PROFILE_FIRST];
    };

    RequiredField::ALL
        .iter()
        .filter(|field| !field.is_present_in(profile))
        .map(|field| field.label())
        .collect()
}

/// Completeness report served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileReadiness {
    /// Whether recommendations can be requested
    pub complete: bool,
    /// Labels of absent fields
    pub missing_fields: Vec<String>,
}

impl ProfileReadiness {
    /// Evaluate a possibly-absent profile
    #[must_use]
    pub fn evaluate(profile: Option<&ProfileRecord>) -> Self {
        Self {
            complete: is_profile_complete_for_ml(profile),
            missing_fields: get_missing_fields(profile)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}
