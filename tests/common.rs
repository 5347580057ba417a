// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds server resources over the in-memory store and a scripted recommendation provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `hercules_server`

use async_trait::async_trait;
use hercules_server::{
    config::ServerConfig,
    database_plugins::MemoryDatabase,
    errors::{AppError, AppResult},
    external::RecommendationProvider,
    models::{MlRequestProfile, Recommendations},
    resources::ServerResources,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Provider that answers every call with canned JSON and counts calls
#[derive(Default)]
pub struct ScriptedRecommender {
    calls: AtomicUsize,
    fail: bool,
}

impl ScriptedRecommender {
    /// Provider whose every call fails as if the service were down
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    /// Number of calls received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self, value: Value) -> AppResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::external_unavailable("ML API", "connection refused"));
        }
        Ok(value)
    }
}

#[async_trait]
impl RecommendationProvider for ScriptedRecommender {
    async fn get_ai_recommendations(
        &self,
        profile: &MlRequestProfile,
    ) -> AppResult<Recommendations> {
        let value = self.answer(json!({ "goal": profile.goal }))?;
        Ok(Recommendations {
            meal: Some(json!({ "name": "Oats", "for_goal": value["goal"] })),
            workout: Some(json!({ "name": "Push day" })),
        })
    }

    async fn get_meal_recommendations(
        &self,
        _profile: &MlRequestProfile,
        meal_type: &str,
        count: u32,
    ) -> AppResult<Value> {
        self.answer(json!({ "meal_type": meal_type, "count": count }))
    }

    async fn get_exercise_recommendations(
        &self,
        _profile: &MlRequestProfile,
        body_part: &str,
        count: u32,
    ) -> AppResult<Value> {
        self.answer(json!({ "body_part": body_part, "count": count }))
    }

    async fn generate_workout_plan(&self, profile: &MlRequestProfile) -> AppResult<Value> {
        self.answer(json!({ "equipment": profile.equipment_access }))
    }

    async fn find_similar_users(
        &self,
        _profile: &MlRequestProfile,
        count: u32,
    ) -> AppResult<Value> {
        self.answer(json!({ "count": count }))
    }

    async fn get_progress_recommendations(
        &self,
        _profile: &MlRequestProfile,
        progress_data: &Value,
    ) -> AppResult<Value> {
        self.answer(json!({ "echo": progress_data }))
    }
}

/// Resources over a fresh in-memory store and the given provider
pub fn create_test_resources(recommender: Arc<ScriptedRecommender>) -> Arc<ServerResources> {
    init_test_logging();
    let database = Arc::new(MemoryDatabase::new());

    Arc::new(ServerResources::new(
        database.clone(),
        database,
        recommender,
        Arc::new(ServerConfig::default()),
    ))
}

/// Onboarding answers that map to a complete, valid profile
pub fn complete_onboarding_answers() -> Value {
    json!({
        "goal": "bulk",
        "stats": {"gender": "Male", "age": "30", "height": "6'0\"", "weight": "200"},
        "gym": "full_gym",
        "experience": "advanced",
        "diet": {"diet": "vegan", "allergies": {"nut": true, "dairy": false}}
    })
}
