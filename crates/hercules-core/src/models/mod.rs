// ABOUTME: Core data models for onboarding, profiles, ML payloads, and fitness logs
// ABOUTME: Re-exports the plain records exchanged with persistence and recommendation collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records shared across the workspace. The profile core transforms
//! copies of these records and never mutates a persisted record in place.
//!
//! - `OnboardingAnswers`: raw, step-collected answers prior to normalization
//! - `ProfileRecord`: a user's persisted fitness attributes
//! - `MlRequestProfile`: the normalized payload sent to the recommendation service
//! - `FitnessLog`: workout, nutrition, and progress log entries

mod logs;
mod ml_request;
mod onboarding;
mod profile;

// Onboarding domain
pub use onboarding::{AgeInput, Allergies, DietAnswers, OnboardingAnswers, OnboardingStats, UnitInput};

// Profile domain
pub use profile::ProfileRecord;

// Recommendation domain
pub use ml_request::{MlRequestProfile, Recommendations};

// Fitness log domain
pub use logs::{
    FitnessLog, LogKind, NewNutritionLog, NewProgressLog, NewWorkoutLog, NutritionLog,
    ProgressLog, WorkoutLog,
};
