// ABOUTME: Weekly totals, today's snapshot, and measurement changes over fitness logs
// ABOUTME: Every function takes the reference instant explicitly so results are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Log aggregation
//!
//! Inputs are slices as returned by the log store (newest first). "Today" is
//! the UTC calendar date of `now`; "this week" is the closed window
//! `[now - 7 days, now]`.

use chrono::{DateTime, Duration, Utc};
use hercules_core::constants::units::DAYS_PER_WEEK;
use hercules_core::models::{NutritionLog, ProgressLog, WorkoutLog};
use serde::{Deserialize, Serialize};

/// True when `created_at` falls in the seven days ending at `now`
#[must_use]
pub fn within_last_week(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let week_ago = now - Duration::days(7);
    created_at >= week_ago && created_at <= now
}

/// True when `created_at` is on the same UTC date as `now`
#[must_use]
pub fn logged_on_day(created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    created_at.date_naive() == now.date_naive()
}

/// Summed macronutrients over a set of meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Fiber (grams)
    pub fiber_g: f64,
}

/// Sum meal macros; unrecorded values count as zero
#[must_use]
pub fn nutrition_totals<'a>(meals: impl IntoIterator<Item = &'a NutritionLog>) -> NutritionTotals {
    meals
        .into_iter()
        .fold(NutritionTotals::default(), |totals, meal| NutritionTotals {
            calories: totals.calories + meal.calories.unwrap_or(0.0),
            protein_g: totals.protein_g + meal.protein_g.unwrap_or(0.0),
            carbs_g: totals.carbs_g + meal.carbs_g.unwrap_or(0.0),
            fat_g: totals.fat_g + meal.fat_g.unwrap_or(0.0),
            fiber_g: totals.fiber_g + meal.fiber_g.unwrap_or(0.0),
        })
}

/// Seven-day activity summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Workouts logged in the window
    pub total_workouts: usize,
    /// Calories logged in the window
    pub total_calories: f64,
    /// Calories per day, always over seven days
    pub avg_calories: f64,
    /// Protein grams per day, always over seven days
    pub avg_protein: f64,
    /// Meals logged in the window
    pub meal_count: usize,
}

/// Summarize the week ending at `now`
#[must_use]
pub fn weekly_summary(
    workouts: &[WorkoutLog],
    meals: &[NutritionLog],
    now: DateTime<Utc>,
) -> WeeklySummary {
    let total_workouts = workouts
        .iter()
        .filter(|log| within_last_week(log.created_at, now))
        .count();

    let weekly_meals: Vec<&NutritionLog> = meals
        .iter()
        .filter(|log| within_last_week(log.created_at, now))
        .collect();
    let totals = nutrition_totals(weekly_meals.iter().copied());

    WeeklySummary {
        total_workouts,
        total_calories: totals.calories,
        avg_calories: totals.calories / DAYS_PER_WEEK,
        avg_protein: totals.protein_g / DAYS_PER_WEEK,
        meal_count: weekly_meals.len(),
    }
}

/// What has been logged on the current day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodaySnapshot {
    /// Most recent workout logged today
    pub workout: Option<WorkoutLog>,
    /// Most recent measurement logged today
    pub progress: Option<ProgressLog>,
    /// Meals logged today
    pub meal_count: usize,
    /// Macros over today's meals
    pub nutrition: NutritionTotals,
}

/// Collect today's entries; the first match in each (newest-first) slice wins
#[must_use]
pub fn today_snapshot(
    workouts: &[WorkoutLog],
    meals: &[NutritionLog],
    progress: &[ProgressLog],
    now: DateTime<Utc>,
) -> TodaySnapshot {
    let todays_meals: Vec<&NutritionLog> = meals
        .iter()
        .filter(|log| logged_on_day(log.created_at, now))
        .collect();

    TodaySnapshot {
        workout: workouts
            .iter()
            .find(|log| logged_on_day(log.created_at, now))
            .cloned(),
        progress: progress
            .iter()
            .find(|log| logged_on_day(log.created_at, now))
            .cloned(),
        meal_count: todays_meals.len(),
        nutrition: nutrition_totals(todays_meals.iter().copied()),
    }
}

/// Direction of a measurement change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Current exceeds previous
    Up,
    /// Current is below previous
    Down,
    /// No difference
    Same,
}

/// Magnitude and direction between two readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Change {
    /// Absolute difference
    pub value: f64,
    /// Sign of the difference
    pub direction: Direction,
}

/// Change from `previous` to `current`
///
/// A reading that is absent or zero on either side means there is nothing
/// to compare and yields `None`.
#[must_use]
pub fn calculate_change(current: Option<f64>, previous: Option<f64>) -> Option<Change> {
    let current = current.filter(|value| *value != 0.0)?;
    let previous = previous.filter(|value| *value != 0.0)?;
    let delta = current - previous;

    let direction = if delta > 0.0 {
        Direction::Up
    } else if delta < 0.0 {
        Direction::Down
    } else {
        Direction::Same
    };

    Some(Change {
        value: delta.abs(),
        direction,
    })
}

/// Today's weigh-in against the weight stored on the profile
#[must_use]
pub fn weight_change(today: Option<&ProgressLog>, profile_weight: Option<f64>) -> Option<Change> {
    calculate_change(today?.weight_lbs, profile_weight)
}

/// Changes between the two most recent measurement check-ins
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressTrend {
    /// Body weight change (pounds)
    pub weight: Option<Change>,
    /// Body fat change (percentage points)
    pub body_fat: Option<Change>,
    /// Muscle mass change (pounds)
    pub muscle_mass: Option<Change>,
}

/// Compare the latest check-in with the one before it
///
/// Fewer than two check-ins gives an empty trend.
#[must_use]
pub fn progress_trend(progress: &[ProgressLog]) -> ProgressTrend {
    let (Some(latest), Some(previous)) = (progress.first(), progress.get(1)) else {
        return ProgressTrend::default();
    };

    ProgressTrend {
        weight: calculate_change(latest.weight_lbs, previous.weight_lbs),
        body_fat: calculate_change(latest.body_fat_percentage, previous.body_fat_percentage),
        muscle_mass: calculate_change(latest.muscle_mass_lbs, previous.muscle_mass_lbs),
    }
}

/// Everything the dashboard shows for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Seven-day totals
    pub weekly: WeeklySummary,
    /// Today's entries
    pub today: TodaySnapshot,
    /// Today's weigh-in against the profile weight
    pub weight_change: Option<Change>,
    /// Latest two check-ins compared
    pub progress_trend: ProgressTrend,
    /// When the summary was computed
    pub generated_at: DateTime<Utc>,
}

/// Build the full dashboard from newest-first log slices
#[must_use]
pub fn dashboard_summary(
    workouts: &[WorkoutLog],
    meals: &[NutritionLog],
    progress: &[ProgressLog],
    profile_weight: Option<f64>,
    now: DateTime<Utc>,
) -> DashboardSummary {
    let today = today_snapshot(workouts, meals, progress, now);
    let weight_change = weight_change(today.progress.as_ref(), profile_weight);

    DashboardSummary {
        weekly: weekly_summary(workouts, meals, now),
        today,
        weight_change,
        progress_trend: progress_trend(progress),
        generated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap()
    }

    fn workout(created_at: DateTime<Utc>) -> WorkoutLog {
        WorkoutLog {
            id: Uuid::new_v4(),
            user_id: "user-1".into(),
            created_at,
            workout_type: "Strength Training".into(),
            duration_minutes: 60,
            notes: None,
        }
    }

    fn meal(created_at: DateTime<Utc>, calories: Option<f64>, protein: Option<f64>) -> NutritionLog {
        NutritionLog {
            id: Uuid::new_v4(),
            user_id: "user-1".into(),
            created_at,
            meal_type: "Lunch".into(),
            meal_name: "Chicken bowl".into(),
            calories,
            protein_g: protein,
            carbs_g: None,
            fat_g: None,
            fiber_g: None,
            notes: None,
        }
    }

    fn check_in(created_at: DateTime<Utc>, weight: Option<f64>, body_fat: Option<f64>) -> ProgressLog {
        ProgressLog {
            id: Uuid::new_v4(),
            user_id: "user-1".into(),
            created_at,
            weight_lbs: weight,
            body_fat_percentage: body_fat,
            muscle_mass_lbs: None,
            chest_inches: None,
            waist_inches: None,
            arms_inches: None,
            legs_inches: None,
            notes: None,
        }
    }

    #[test]
    fn test_week_window_is_closed() {
        let now = now();
        assert!(within_last_week(now, now));
        assert!(within_last_week(now - Duration::days(7), now));
        assert!(!within_last_week(now - Duration::days(7) - Duration::seconds(1), now));
        assert!(!within_last_week(now + Duration::seconds(1), now));
    }

    #[test]
    fn test_logged_on_day_uses_utc_date() {
        let now = now();
        let midnight = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();
        assert!(logged_on_day(midnight, now));
        assert!(!logged_on_day(midnight - Duration::seconds(1), now));
    }

    #[test]
    fn test_weekly_summary_averages_over_seven_days() {
        let now = now();
        let workouts = vec![workout(now), workout(now - Duration::days(3)), workout(now - Duration::days(10))];
        let meals = vec![
            meal(now, Some(700.0), Some(40.0)),
            meal(now - Duration::days(2), Some(700.0), None),
            meal(now - Duration::days(30), Some(5000.0), Some(300.0)),
        ];

        let summary = weekly_summary(&workouts, &meals, now);

        assert_eq!(summary.total_workouts, 2);
        assert_eq!(summary.meal_count, 2);
        assert!((summary.total_calories - 1400.0).abs() < f64::EPSILON);
        assert!((summary.avg_calories - 200.0).abs() < f64::EPSILON);
        assert!((summary.avg_protein - 40.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_today_snapshot_picks_newest_entries() {
        let now = now();
        let first = workout(now);
        let workouts = vec![first.clone(), workout(now - Duration::hours(2))];
        let meals = vec![meal(now, Some(500.0), Some(30.0)), meal(now, None, Some(10.0))];
        let progress = vec![check_in(now - Duration::days(1), Some(180.0), None)];

        let snapshot = today_snapshot(&workouts, &meals, &progress, now);

        assert_eq!(snapshot.workout, Some(first));
        assert_eq!(snapshot.progress, None);
        assert_eq!(snapshot.meal_count, 2);
        assert!((snapshot.nutrition.calories - 500.0).abs() < f64::EPSILON);
        assert!((snapshot.nutrition.protein_g - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calculate_change_directions() {
        let up = calculate_change(Some(182.0), Some(180.0)).unwrap();
        assert_eq!(up.direction, Direction::Up);
        assert!((up.value - 2.0).abs() < f64::EPSILON);

        let down = calculate_change(Some(178.5), Some(180.0)).unwrap();
        assert_eq!(down.direction, Direction::Down);
        assert!((down.value - 1.5).abs() < f64::EPSILON);

        let same = calculate_change(Some(180.0), Some(180.0)).unwrap();
        assert_eq!(same.direction, Direction::Same);
    }

    #[test]
    fn test_calculate_change_needs_both_readings() {
        assert_eq!(calculate_change(None, Some(180.0)), None);
        assert_eq!(calculate_change(Some(180.0), None), None);
        assert_eq!(calculate_change(Some(0.0), Some(180.0)), None);
        assert_eq!(calculate_change(Some(180.0), Some(0.0)), None);
    }

    #[test]
    fn test_weight_change_against_profile() {
        let today = check_in(now(), Some(195.0), None);

        let change = weight_change(Some(&today), Some(200.0)).unwrap();
        assert_eq!(change.direction, Direction::Down);
        assert!((change.value - 5.0).abs() < f64::EPSILON);

        assert_eq!(weight_change(None, Some(200.0)), None);
        assert_eq!(weight_change(Some(&today), None), None);
    }

    #[test]
    fn test_progress_trend_compares_latest_two() {
        let now = now();
        let progress = vec![
            check_in(now, Some(190.0), Some(18.0)),
            check_in(now - Duration::days(7), Some(192.0), None),
        ];

        let trend = progress_trend(&progress);
        assert_eq!(trend.weight.map(|c| c.direction), Some(Direction::Down));
        assert_eq!(trend.body_fat, None);
        assert_eq!(progress_trend(&progress[..1]), ProgressTrend::default());
    }

    #[test]
    fn test_dashboard_summary_combines_parts() {
        let now = now();
        let progress = vec![check_in(now, Some(202.0), None)];

        let dashboard = dashboard_summary(&[], &[], &progress, Some(200.0), now);

        assert_eq!(dashboard.weekly.total_workouts, 0);
        assert_eq!(dashboard.today.progress.as_ref().and_then(|p| p.weight_lbs), Some(202.0));
        assert_eq!(dashboard.weight_change.map(|c| c.direction), Some(Direction::Up));
        assert_eq!(dashboard.generated_at, now);
    }
}
