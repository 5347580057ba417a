// ABOUTME: Fitness log route handlers for workouts, meals, and progress check-ins
// ABOUTME: Also serves the dashboard summary computed from the user's logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::NewLogEntry;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use chrono::Utc;
use hercules_core::models::LogKind;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Fitness log routes
pub struct LogRoutes;

impl LogRoutes {
    /// Create log and dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/logs/:kind",
                get(Self::handle_list_logs).post(Self::handle_add_log),
            )
            .route(
                "/api/users/:user_id/logs/:kind/:log_id",
                delete(Self::handle_delete_log),
            )
            .route("/api/users/:user_id/dashboard", get(Self::handle_dashboard))
            .with_state(resources)
    }

    async fn handle_list_logs(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, kind)): Path<(String, LogKind)>,
    ) -> Result<Response, AppError> {
        let logs = resources.fitness_log_service().list(&user_id, kind).await?;
        Ok((StatusCode::OK, Json(logs)).into_response())
    }

    async fn handle_add_log(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, kind)): Path<(String, LogKind)>,
        Json(body): Json<Value>,
    ) -> Result<Response, AppError> {
        let entry = NewLogEntry::from_json(kind, body)?;
        let log = resources
            .fitness_log_service()
            .add(&user_id, entry, Utc::now())
            .await?;

        Ok((StatusCode::CREATED, Json(log)).into_response())
    }

    async fn handle_delete_log(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, kind, log_id)): Path<(String, LogKind, Uuid)>,
    ) -> Result<Response, AppError> {
        resources
            .fitness_log_service()
            .delete(&user_id, kind, log_id)
            .await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
    ) -> Result<Response, AppError> {
        let summary = resources
            .fitness_log_service()
            .dashboard(&user_id, Utc::now())
            .await?;

        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}
