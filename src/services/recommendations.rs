// ABOUTME: Gates recommendation requests on profile completeness and proxies them to the provider
// ABOUTME: The combined meal/workout call returns None instead of failing for unready profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ProfileService;
use crate::database_plugins::ProfileStore;
use crate::errors::AppResult;
use crate::external::RecommendationProvider;
use hercules_core::models::Recommendations;
use hercules_intelligence::{is_profile_complete_for_ml, transform_profile};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Recommendation workflow
#[derive(Clone)]
pub struct RecommendationService {
    profiles: Arc<dyn ProfileStore>,
    provider: Arc<dyn RecommendationProvider>,
}

impl RecommendationService {
    /// Create the service over a profile store and a provider
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileStore>, provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { profiles, provider }
    }

    /// Meal and workout suggestion for the user
    ///
    /// Returns `Ok(None)` without contacting the provider when the user has
    /// no profile or the profile is incomplete.
    ///
    /// # Errors
    ///
    /// Store or provider failures.
    pub async fn fetch(&self, user_id: &str) -> AppResult<Option<Recommendations>> {
        let profile = self.profiles.fetch_profile(user_id).await?;

        let Some(profile) = profile.filter(|p| is_profile_complete_for_ml(Some(p))) else {
            debug!(user.id = %user_id, "Skipping recommendations for incomplete profile");
            return Ok(None);
        };

        let payload = transform_profile(&profile);
        let recommendations = self.provider.get_ai_recommendations(&payload).await?;
        info!(user.id = %user_id, "Fetched recommendations");

        Ok(Some(recommendations))
    }

    /// Ranked meals for a meal slot
    ///
    /// # Errors
    ///
    /// `ProfileIncomplete`/`ResourceNotFound` for unready profiles, provider failures.
    pub async fn meals(&self, user_id: &str, meal_type: &str, count: u32) -> AppResult<Value> {
        let payload = self.profile_service().ml_payload(user_id).await?;
        self.provider
            .get_meal_recommendations(&payload, meal_type, count)
            .await
    }

    /// Ranked exercises for a body part
    ///
    /// # Errors
    ///
    /// `ProfileIncomplete`/`ResourceNotFound` for unready profiles, provider failures.
    pub async fn exercises(&self, user_id: &str, body_part: &str, count: u32) -> AppResult<Value> {
        let payload = self.profile_service().ml_payload(user_id).await?;
        self.provider
            .get_exercise_recommendations(&payload, body_part, count)
            .await
    }

    /// Generated workout plan
    ///
    /// # Errors
    ///
    /// `ProfileIncomplete`/`ResourceNotFound` for unready profiles, provider failures.
    pub async fn workout_plan(&self, user_id: &str) -> AppResult<Value> {
        let payload = self.profile_service().ml_payload(user_id).await?;
        self.provider.generate_workout_plan(&payload).await
    }

    /// Users with similar profiles
    ///
    /// # Errors
    ///
    /// `ProfileIncomplete`/`ResourceNotFound` for unready profiles, provider failures.
    pub async fn similar_users(&self, user_id: &str, count: u32) -> AppResult<Value> {
        let payload = self.profile_service().ml_payload(user_id).await?;
        self.provider.find_similar_users(&payload, count).await
    }

    /// Suggestions from logged progress
    ///
    /// # Errors
    ///
    /// `ProfileIncomplete`/`ResourceNotFound` for unready profiles, provider failures.
    pub async fn progress(&self, user_id: &str, progress_data: &Value) -> AppResult<Value> {
        let payload = self.profile_service().ml_payload(user_id).await?;
        self.provider
            .get_progress_recommendations(&payload, progress_data)
            .await
    }

    fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.profiles.clone())
    }
}
