// ABOUTME: Recommendation route handlers proxying to the ML service
// ABOUTME: The combined endpoint yields null for incomplete profiles; targeted endpoints reject them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hercules_core::constants::ml_defaults::{
    DEFAULT_EXERCISE_COUNT, DEFAULT_MEAL_COUNT, DEFAULT_SIMILAR_USER_COUNT,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Meal recommendation options
#[derive(Debug, Deserialize)]
pub struct MealRecommendationRequest {
    /// Meal slot (e.g. "breakfast")
    pub meal_type: String,
    /// How many meals to return
    #[serde(default)]
    pub n_recommendations: Option<u32>,
}

/// Exercise recommendation options
#[derive(Debug, Deserialize)]
pub struct ExerciseRecommendationRequest {
    /// Target body part
    pub body_part: String,
    /// How many exercises to return
    #[serde(default)]
    pub n_recommendations: Option<u32>,
}

/// Similar user lookup options
#[derive(Debug, Default, Deserialize)]
pub struct SimilarUsersRequest {
    /// How many users to return
    #[serde(default)]
    pub n_recommendations: Option<u32>,
}

/// Progress recommendation input
#[derive(Debug, Deserialize)]
pub struct ProgressRecommendationRequest {
    /// Client-side progress data, forwarded as-is
    #[serde(default)]
    pub progress_data: Value,
}

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/recommendations",
                post(Self::handle_recommendations),
            )
            .route(
                "/api/users/:user_id/recommendations/meals",
                post(Self::handle_meals),
            )
            .route(
                "/api/users/:user_id/recommendations/exercises",
                post(Self::handle_exercises),
            )
            .route(
                "/api/users/:user_id/recommendations/workout-plan",
                post(Self::handle_workout_plan),
            )
            .route(
                "/api/users/:user_id/recommendations/similar-users",
                post(Self::handle_similar_users),
            )
            .route(
                "/api/users/:user_id/recommendations/progress",
                post(Self::handle_progress),
            )
            .with_state(resources)
    }

    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let recommendations = resources.recommendation_service().fetch(&user_id).await?;
        Ok((StatusCode::OK, Json(recommendations)).into_response())
    }

    async fn handle_meals(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<MealRecommendationRequest>,
    ) -> Result<Response, AppError> {
        let count = request.n_recommendations.unwrap_or(DEFAULT_MEAL_COUNT);
        let meals = resources
            .recommendation_service()
            .meals(&user_id, &request.meal_type, count)
            .await?;

        Ok((StatusCode::OK, Json(meals)).into_response())
    }

    async fn handle_exercises(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<ExerciseRecommendationRequest>,
    ) -> Result<Response, AppError> {
        let count = request.n_recommendations.unwrap_or(DEFAULT_EXERCISE_COUNT);
        let exercises = resources
            .recommendation_service()
            .exercises(&user_id, &request.body_part, count)
            .await?;

        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    async fn handle_workout_plan(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let plan = resources
            .recommendation_service()
            .workout_plan(&user_id)
            .await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    async fn handle_similar_users(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<SimilarUsersRequest>,
    ) -> Result<Response, AppError> {
        let count = request
            .n_recommendations
            .unwrap_or(DEFAULT_SIMILAR_USER_COUNT);
        let users = resources
            .recommendation_service()
            .similar_users(&user_id, count)
            .await?;

        Ok((StatusCode::OK, Json(users)).into_response())
    }

    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<ProgressRecommendationRequest>,
    ) -> Result<Response, AppError> {
        let advice = resources
            .recommendation_service()
            .progress(&user_id, &request.progress_data)
            .await?;

        Ok((StatusCode::OK, Json(advice)).into_response())
    }
}
