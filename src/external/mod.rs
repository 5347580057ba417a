// ABOUTME: External service clients and the recommendation provider abstraction
// ABOUTME: Services depend on the RecommendationProvider trait, not on the HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API clients
//!
//! The recommendation service is an opaque HTTP collaborator. Everything the
//! server needs from it goes through [`RecommendationProvider`], so tests and
//! alternative backends can stand in for [`MlClient`].

/// HTTP client for the recommendation service
pub mod ml_client;

pub use ml_client::MlClient;

use crate::errors::AppResult;
use async_trait::async_trait;
use hercules_core::models::{MlRequestProfile, Recommendations};
use serde_json::Value;

/// Source of meal, workout, and peer recommendations
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// One meal and one workout suggestion for the profile
    async fn get_ai_recommendations(
        &self,
        profile: &MlRequestProfile,
    ) -> AppResult<Recommendations>;

    /// Ranked meals for a meal slot
    async fn get_meal_recommendations(
        &self,
        profile: &MlRequestProfile,
        meal_type: &str,
        count: u32,
    ) -> AppResult<Value>;

    /// Ranked exercises for a body part
    async fn get_exercise_recommendations(
        &self,
        profile: &MlRequestProfile,
        body_part: &str,
        count: u32,
    ) -> AppResult<Value>;

    /// Full workout plan
    async fn generate_workout_plan(&self, profile: &MlRequestProfile) -> AppResult<Value>;

    /// Users with similar profiles
    async fn find_similar_users(&self, profile: &MlRequestProfile, count: u32) -> AppResult<Value>;

    /// Suggestions based on logged progress
    async fn get_progress_recommendations(
        &self,
        profile: &MlRequestProfile,
        progress_data: &Value,
    ) -> AppResult<Value>;
}
