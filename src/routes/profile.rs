// ABOUTME: Profile route handlers for signup rows, reads, readiness, and the ML payload
// ABOUTME: Readiness answers even for users without a row; the ML payload requires a complete profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Signup body; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct SignUpRequest {
    /// Display name
    #[serde(default)]
    pub username: Option<String>,
}

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/profile",
                get(Self::handle_get_profile).post(Self::handle_sign_up),
            )
            .route(
                "/api/users/:user_id/profile/readiness",
                get(Self::handle_readiness),
            )
            .route(
                "/api/users/:user_id/profile/ml-payload",
                get(Self::handle_ml_payload),
            )
            .with_state(resources)
    }

    async fn handle_sign_up(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        Json(request): Json<SignUpRequest>,
    ) -> Result<Response, AppError> {
        let profile = resources
            .profile_service()
            .sign_up(&user_id, request.username)
            .await?;

        Ok((StatusCode::CREATED, Json(profile)).into_response())
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let profile = resources.profile_service().fetch(&user_id).await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_readiness(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let readiness = resources.profile_service().readiness(&user_id).await?;
        Ok((StatusCode::OK, Json(readiness)).into_response())
    }

    async fn handle_ml_payload(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let payload = resources.profile_service().ml_payload(&user_id).await?;
        Ok((StatusCode::OK, Json(payload)).into_response())
    }
}
