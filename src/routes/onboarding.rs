// ABOUTME: Onboarding submission route
// ABOUTME: Maps questionnaire answers onto the user's profile row and returns the stored record
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
use hercules_core::models::OnboardingAnswers;
use std::sync::Arc;

/// Onboarding routes
pub struct OnboardingRoutes;

impl OnboardingRoutes {
    /// Create onboarding routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/onboarding",
                post(Self::handle_complete_onboarding),
            )
            .with_state(resources)
    }

    async fn handle_complete_onboarding(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(answers): Json<OnboardingAnswers>,
    ) -> Result<Response, AppError> {
        let profile = resources
            .onboarding_service()
            .complete(&user_id, &answers)
            .await?;

        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}
