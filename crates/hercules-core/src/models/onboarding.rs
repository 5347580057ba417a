// ABOUTME: Onboarding questionnaire answers collected across the five form steps
// ABOUTME: AgeInput and UnitInput keep the raw JSON shape so parsing stays null-safe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Raw answers from the onboarding questionnaire
///
/// Built incrementally across the goal, stats, gym, experience, and diet
/// steps, consumed once by the profile mapper, then discarded.
///
/// # Examples
///
/// ```rust
/// use hercules_core::models::OnboardingAnswers;
///
/// let answers: OnboardingAnswers = serde_json::from_str(
///     r#"{"goal": "bulk", "stats": {"gender": "male", "age": "30", "height": "6'0\"", "weight": "200"}}"#,
/// ).unwrap();
/// assert_eq!(answers.goal.as_deref(), Some("bulk"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    /// Fitness goal (`cut`, `bulk`, `maintain`)
    #[serde(default)]
    pub goal: Option<String>,
    /// Body stats step
    #[serde(default)]
    pub stats: Option<OnboardingStats>,
    /// Gym access (`commercial`, `home`, `bodyweight`, free string)
    #[serde(default)]
    pub gym: Option<String>,
    /// Training experience (`beginner`, `intermediate`, `advanced`)
    #[serde(default)]
    pub experience: Option<String>,
    /// Diet step
    #[serde(default)]
    pub diet: Option<DietAnswers>,
}

/// Body stats as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingStats {
    /// Free-form gender answer
    #[serde(default)]
    pub gender: Option<String>,
    /// Age, either typed text or a number
    #[serde(default)]
    pub age: Option<AgeInput>,
    /// Height in any supported notation (`5'10"`, `180cm`, `1.8m`, `70in`)
    #[serde(default)]
    pub height: Option<UnitInput>,
    /// Weight in any supported notation (`150lbs`, `68kg`, `150`)
    #[serde(default)]
    pub weight: Option<UnitInput>,
}

/// Diet step answers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietAnswers {
    /// Diet preference (`all`, `vegetarian`, `vegan`)
    #[serde(default)]
    pub diet: Option<String>,
    /// Allergy flags
    #[serde(default)]
    pub allergies: Option<Allergies>,
}

/// Allergy flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergies {
    /// Nut allergy
    #[serde(default)]
    pub nut: Option<bool>,
    /// Dairy allergy
    #[serde(default)]
    pub dairy: Option<bool>,
}

/// Age answer as it arrives from a form: a number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    /// Numeric JSON value
    Number(f64),
    /// Text typed into the form
    Text(String),
}

/// Height or weight answer as it arrives at the JSON boundary
///
/// Only `Text` carries a parseable measurement; any other JSON value is kept
/// so the parser can report it as "unit not determinable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitInput {
    /// Free-text measurement
    Text(String),
    /// Any non-string JSON value
    Value(serde_json::Value),
}

impl UnitInput {
    /// Borrow the text form, if this input is a string
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Value(_) => None,
        }
    }
}

impl From<&str> for UnitInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<serde_json::Value> for UnitInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Value(other),
        }
    }
}
