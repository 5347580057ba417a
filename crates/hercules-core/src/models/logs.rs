// ABOUTME: Workout, nutrition, and progress log entries scoped by user
// ABOUTME: FitnessLog wraps the three kinds so one store trait can serve them all
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of fitness log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Training session
    Workout,
    /// Meal entry
    Nutrition,
    /// Body measurement check-in
    Progress,
}

impl LogKind {
    /// All kinds, in display order
    pub const ALL: [Self; 3] = [Self::Workout, Self::Nutrition, Self::Progress];

    /// Collection name used by stores and logs
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Workout => "workout_logs",
            Self::Nutrition => "nutrition_logs",
            Self::Progress => "progress_logs",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workout => write!(f, "workout"),
            Self::Nutrition => write!(f, "nutrition"),
            Self::Progress => write!(f, "progress"),
        }
    }
}

/// Logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
    /// Workout label (e.g. "Strength Training")
    pub workout_type: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionLog {
    /// Log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
    /// Meal slot (e.g. "Breakfast")
    pub meal_type: String,
    /// Meal name
    pub meal_name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (grams)
    #[serde(default)]
    pub protein_g: Option<f64>,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat (grams)
    #[serde(default)]
    pub fat_g: Option<f64>,
    /// Fiber (grams)
    #[serde(default)]
    pub fiber_g: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Logged body measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    /// Log identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: String,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
    /// Body weight (pounds)
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    /// Body fat (percent)
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass (pounds)
    #[serde(default)]
    pub muscle_mass_lbs: Option<f64>,
    /// Chest circumference (inches)
    #[serde(default)]
    pub chest_inches: Option<f64>,
    /// Waist circumference (inches)
    #[serde(default)]
    pub waist_inches: Option<f64>,
    /// Arm circumference (inches)
    #[serde(default)]
    pub arms_inches: Option<f64>,
    /// Leg circumference (inches)
    #[serde(default)]
    pub legs_inches: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Workout submission from the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkoutLog {
    /// Workout label; defaults to "Strength Training"
    #[serde(default)]
    pub workout_type: Option<String>,
    /// Session length; defaults to 60 minutes
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Meal submission from the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewNutritionLog {
    /// Meal slot; defaults to "Breakfast"
    #[serde(default)]
    pub meal_type: Option<String>,
    /// Meal name
    #[serde(default)]
    pub meal_name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (grams)
    #[serde(default)]
    pub protein_g: Option<f64>,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat (grams)
    #[serde(default)]
    pub fat_g: Option<f64>,
    /// Fiber (grams)
    #[serde(default)]
    pub fiber_g: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Measurement submission from the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProgressLog {
    /// Body weight (pounds)
    #[serde(default)]
    pub weight_lbs: Option<f64>,
    /// Body fat (percent)
    #[serde(default)]
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass (pounds)
    #[serde(default)]
    pub muscle_mass_lbs: Option<f64>,
    /// Chest circumference (inches)
    #[serde(default)]
    pub chest_inches: Option<f64>,
    /// Waist circumference (inches)
    #[serde(default)]
    pub waist_inches: Option<f64>,
    /// Arm circumference (inches)
    #[serde(default)]
    pub arms_inches: Option<f64>,
    /// Leg circumference (inches)
    #[serde(default)]
    pub legs_inches: Option<f64>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Any fitness log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitnessLog {
    /// Training session
    Workout(WorkoutLog),
    /// Meal entry
    Nutrition(NutritionLog),
    /// Body measurement check-in
    Progress(ProgressLog),
}

impl FitnessLog {
    /// Log identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        match self {
            Self::Workout(log) => log.id,
            Self::Nutrition(log) => log.id,
            Self::Progress(log) => log.id,
        }
    }

    /// Owning user
    #[must_use]
    pub fn user_id(&self) -> &str {
        match self {
            Self::Workout(log) => &log.user_id,
            Self::Nutrition(log) => &log.user_id,
            Self::Progress(log) => &log.user_id,
        }
    }

    /// Recording time
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Workout(log) => log.created_at,
            Self::Nutrition(log) => log.created_at,
            Self::Progress(log) => log.created_at,
        }
    }

    /// Kind of this entry
    #[must_use]
    pub const fn kind(&self) -> LogKind {
        match self {
            Self::Workout(_) => LogKind::Workout,
            Self::Nutrition(_) => LogKind::Nutrition,
            Self::Progress(_) => LogKind::Progress,
        }
    }
}
