// ABOUTME: reqwest client for the recommendation service HTTP API
// ABOUTME: Wraps every call as {"user_profile": ...} and maps failures to ML API errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation service client
//!
//! # Example
//! ```rust,no_run
//! use hercules_server::config::MlApiConfig;
//! use hercules_server::external::{MlClient, RecommendationProvider};
//! use hercules_core::models::ProfileRecord;
//! use hercules_intelligence::transform_profile;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MlClient::new(&MlApiConfig::default());
//! let payload = transform_profile(&ProfileRecord::new("user-1"));
//! let recommendations = client.get_ai_recommendations(&payload).await?;
//! # Ok(())
//! # }
//! ```

use super::RecommendationProvider;
use crate::config::MlApiConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::http_client::create_client_with_timeout;
use async_trait::async_trait;
use hercules_core::constants::service_names::ML_API;
use hercules_core::models::{MlRequestProfile, Recommendations};
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

/// HTTP client for the recommendation service
#[derive(Debug, Clone)]
pub struct MlClient {
    base_url: String,
    http_client: Client,
}

impl MlClient {
    /// Create a client from connection settings
    #[must_use]
    pub fn new(config: &MlApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            http_client: create_client_with_timeout(
                config.timeout_secs,
                config.connect_timeout_secs,
            ),
        }
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> AppResult<Value> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "Calling recommendation service");

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::external_unavailable(ML_API, e.to_string())
                } else {
                    AppError::external_service(ML_API, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(
                ML_API,
                format!("HTTP {status}: {text}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::external_service(ML_API, format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl RecommendationProvider for MlClient {
    #[instrument(skip(self, profile), fields(ml.username = %profile.username))]
    async fn get_ai_recommendations(
        &self,
        profile: &MlRequestProfile,
    ) -> AppResult<Recommendations> {
        let body = json!({ "user_profile": profile });

        let meal_data = self.post_json("/recommend/meals", &body).await?;
        let workout_data = self.post_json("/recommend/workouts", &body).await?;

        Ok(Recommendations {
            meal: meal_data.get("meal").cloned(),
            workout: workout_data.get("workout").cloned(),
        })
    }

    async fn get_meal_recommendations(
        &self,
        profile: &MlRequestProfile,
        meal_type: &str,
        count: u32,
    ) -> AppResult<Value> {
        let body = json!({
            "user_profile": profile,
            "meal_type": meal_type,
            "n_recommendations": count,
        });
        self.post_json("/ml/recommend-meals", &body).await
    }

    async fn get_exercise_recommendations(
        &self,
        profile: &MlRequestProfile,
        body_part: &str,
        count: u32,
    ) -> AppResult<Value> {
        let body = json!({
            "user_profile": profile,
            "body_part": body_part,
            "n_recommendations": count,
        });
        self.post_json("/ml/recommend-exercises", &body).await
    }

    async fn generate_workout_plan(&self, profile: &MlRequestProfile) -> AppResult<Value> {
        self.post_json("/ml/generate-workout", &json!({ "user_profile": profile }))
            .await
    }

    async fn find_similar_users(&self, profile: &MlRequestProfile, count: u32) -> AppResult<Value> {
        let body = json!({
            "user_profile": profile,
            "n_recommendations": count,
        });
        self.post_json("/ml/similar-users", &body).await
    }

    async fn get_progress_recommendations(
        &self,
        profile: &MlRequestProfile,
        progress_data: &Value,
    ) -> AppResult<Value> {
        let body = json!({
            "user_profile": profile,
            "progress_data": progress_data,
        });
        self.post_json("/ml/progress-recommendations", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = MlApiConfig {
            base_url: "http://ml.internal:5001/api/".into(),
            ..MlApiConfig::default()
        };

        assert_eq!(MlClient::new(&config).base_url(), "http://ml.internal:5001/api");
    }
}
