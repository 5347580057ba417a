// ABOUTME: Workout, nutrition, and progress log management plus dashboard aggregation
// ABOUTME: Fills submission defaults, stamps ids and times, and summarizes logs for a reference instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database_plugins::{FitnessLogStore, ProfileStore};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use hercules_core::models::{
    FitnessLog, LogKind, NewNutritionLog, NewProgressLog, NewWorkoutLog, NutritionLog, ProgressLog,
    WorkoutLog,
};
use hercules_intelligence::{dashboard_summary, DashboardSummary};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const DEFAULT_WORKOUT_TYPE: &str = "Strength Training";
const DEFAULT_WORKOUT_MINUTES: u32 = 60;
const DEFAULT_MEAL_TYPE: &str = "Breakfast";

/// Submitted log entry of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum NewLogEntry {
    /// Training session
    Workout(NewWorkoutLog),
    /// Meal
    Nutrition(NewNutritionLog),
    /// Measurements
    Progress(NewProgressLog),
}

impl NewLogEntry {
    /// Decode a request body for the given kind
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the body does not match the kind's shape.
    pub fn from_json(kind: LogKind, body: Value) -> AppResult<Self> {
        let invalid = |e: serde_json::Error| AppError::invalid_input(format!("Invalid {kind} log: {e}"));

        Ok(match kind {
            LogKind::Workout => Self::Workout(serde_json::from_value(body).map_err(invalid)?),
            LogKind::Nutrition => Self::Nutrition(serde_json::from_value(body).map_err(invalid)?),
            LogKind::Progress => Self::Progress(serde_json::from_value(body).map_err(invalid)?),
        })
    }
}

/// Fitness log workflow
#[derive(Clone)]
pub struct FitnessLogService {
    logs: Arc<dyn FitnessLogStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl FitnessLogService {
    /// Create the service over the log and profile stores
    #[must_use]
    pub fn new(logs: Arc<dyn FitnessLogStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { logs, profiles }
    }

    /// Entries of one kind, newest first
    ///
    /// # Errors
    ///
    /// Store failures.
    pub async fn list(&self, user_id: &str, kind: LogKind) -> AppResult<Vec<FitnessLog>> {
        self.logs.list_logs(user_id, kind).await
    }

    /// Record a submission at `now`
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for a meal without a name, or store failures.
    pub async fn add(
        &self,
        user_id: &str,
        entry: NewLogEntry,
        now: DateTime<Utc>,
    ) -> AppResult<FitnessLog> {
        let log = build_log(user_id, entry, now)?;
        let stored = self.logs.insert_log(log).await?;

        info!(user.id = %user_id, table = stored.kind().table_name(), log.id = %stored.id(), "Logged entry");
        Ok(stored)
    }

    /// Delete one of the user's entries
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when the user has no such entry.
    pub async fn delete(&self, user_id: &str, kind: LogKind, log_id: Uuid) -> AppResult<()> {
        self.logs.delete_log(user_id, kind, log_id).await
    }

    /// Weekly totals, today's entries, and weight changes as of `now`
    ///
    /// # Errors
    ///
    /// Store failures.
    pub async fn dashboard(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<DashboardSummary> {
        let workouts: Vec<WorkoutLog> = self
            .list(user_id, LogKind::Workout)
            .await?
            .into_iter()
            .filter_map(|log| match log {
                FitnessLog::Workout(workout) => Some(workout),
                _ => None,
            })
            .collect();

        let meals: Vec<NutritionLog> = self
            .list(user_id, LogKind::Nutrition)
            .await?
            .into_iter()
            .filter_map(|log| match log {
                FitnessLog::Nutrition(meal) => Some(meal),
                _ => None,
            })
            .collect();

        let progress: Vec<ProgressLog> = self
            .list(user_id, LogKind::Progress)
            .await?
            .into_iter()
            .filter_map(|log| match log {
                FitnessLog::Progress(check_in) => Some(check_in),
                _ => None,
            })
            .collect();

        let profile_weight = self
            .profiles
            .fetch_profile(user_id)
            .await?
            .and_then(|profile| profile.weight);

        Ok(dashboard_summary(
            &workouts,
            &meals,
            &progress,
            profile_weight,
            now,
        ))
    }
}

fn build_log(user_id: &str, entry: NewLogEntry, now: DateTime<Utc>) -> AppResult<FitnessLog> {
    let id = Uuid::new_v4();
    let user_id = user_id.to_owned();

    Ok(match entry {
        NewLogEntry::Workout(new) => FitnessLog::Workout(WorkoutLog {
            id,
            user_id,
            created_at: now,
            workout_type: new
                .workout_type
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| DEFAULT_WORKOUT_TYPE.to_owned()),
            duration_minutes: new
                .duration_minutes
                .filter(|minutes| *minutes != 0)
                .unwrap_or(DEFAULT_WORKOUT_MINUTES),
            notes: new.notes,
        }),
        NewLogEntry::Nutrition(new) => {
            if new.meal_name.trim().is_empty() {
                return Err(AppError::missing_field("Meal name is required"));
            }

            FitnessLog::Nutrition(NutritionLog {
                id,
                user_id,
                created_at: now,
                meal_type: new
                    .meal_type
                    .filter(|slot| !slot.is_empty())
                    .unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_owned()),
                meal_name: new.meal_name,
                calories: new.calories,
                protein_g: new.protein_g,
                carbs_g: new.carbs_g,
                fat_g: new.fat_g,
                fiber_g: new.fiber_g,
                notes: new.notes,
            })
        }
        NewLogEntry::Progress(new) => FitnessLog::Progress(ProgressLog {
            id,
            user_id,
            created_at: now,
            weight_lbs: new.weight_lbs,
            body_fat_percentage: new.body_fat_percentage,
            muscle_mass_lbs: new.muscle_mass_lbs,
            chest_inches: new.chest_inches,
            waist_inches: new.waist_inches,
            arms_inches: new.arms_inches,
            legs_inches: new.legs_inches,
            notes: new.notes,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database_plugins::MemoryDatabase;
    use chrono::{Duration, TimeZone};
    use hercules_core::models::ProfileRecord;
    use hercules_intelligence::Direction;
    use serde_json::json;

    fn service() -> (FitnessLogService, Arc<MemoryDatabase>) {
        let db = Arc::new(MemoryDatabase::new());
        (FitnessLogService::new(db.clone(), db.clone()), db)
    }

    #[tokio::test]
    async fn test_workout_defaults_applied() {
        let (service, _) = service();
        let entry = NewLogEntry::from_json(LogKind::Workout, json!({})).unwrap();

        let FitnessLog::Workout(log) = service.add("user-1", entry, Utc::now()).await.unwrap() else {
            panic!("expected a workout log");
        };

        assert_eq!(log.workout_type, "Strength Training");
        assert_eq!(log.duration_minutes, 60);
    }

    #[tokio::test]
    async fn test_meal_requires_name() {
        let (service, _) = service();
        let entry = NewLogEntry::from_json(LogKind::Nutrition, json!({"calories": 300})).unwrap();

        assert!(service.add("user-1", entry, Utc::now()).await.is_err());
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let error = NewLogEntry::from_json(LogKind::Workout, json!({"duration_minutes": "long"}))
            .unwrap_err();

        assert!(error.message.starts_with("Invalid workout log"));
    }

    #[tokio::test]
    async fn test_dashboard_uses_profile_weight() {
        let (service, db) = service();
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        db.create_profile(&ProfileRecord {
            weight: Some(200.0),
            ..ProfileRecord::new("user-1")
        })
        .await
        .unwrap();

        let meal = NewLogEntry::Nutrition(NewNutritionLog {
            meal_name: "Eggs".into(),
            calories: Some(350.0),
            protein_g: Some(21.0),
            ..NewNutritionLog::default()
        });
        let weigh_in = NewLogEntry::Progress(NewProgressLog {
            weight_lbs: Some(198.0),
            ..NewProgressLog::default()
        });
        service.add("user-1", meal, now - Duration::minutes(5)).await.unwrap();
        service.add("user-1", weigh_in, now - Duration::minutes(1)).await.unwrap();

        let dashboard = service.dashboard("user-1", now).await.unwrap();

        assert_eq!(dashboard.weekly.meal_count, 1);
        assert_eq!(dashboard.today.meal_count, 1);
        assert_eq!(
            dashboard.weight_change.map(|change| change.direction),
            Some(Direction::Down)
        );
    }
}
