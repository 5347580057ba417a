// ABOUTME: Stateless unit parsing and onboarding normalization endpoints
// ABOUTME: Lets clients preview how free-text height and weight will be stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use hercules_core::models::{OnboardingAnswers, UnitInput};
use hercules_intelligence::{parse_height_input, parse_weight_input, transform_onboarding_data};
use serde::{Deserialize, Serialize};

/// Free-text measurements to parse
#[derive(Debug, Default, Deserialize)]
pub struct ParseUnitsRequest {
    /// Height as typed
    #[serde(default)]
    pub height: Option<UnitInput>,
    /// Weight as typed
    #[serde(default)]
    pub weight: Option<UnitInput>,
}

/// Parsed measurements; `null` where the unit could not be determined
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseUnitsResponse {
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in pounds
    pub weight_lbs: Option<f64>,
}

/// Unit routes
pub struct UnitRoutes;

impl UnitRoutes {
    /// Create unit routes
    pub fn routes() -> Router {
        Router::new()
            .route("/api/units/parse", post(Self::handle_parse))
            .route("/api/units/normalize", post(Self::handle_normalize))
    }

    async fn handle_parse(Json(request): Json<ParseUnitsRequest>) -> Result<Response, AppError> {
        let response = ParseUnitsResponse {
            height_cm: request.height.as_ref().and_then(parse_height_input),
            weight_lbs: request.weight.as_ref().and_then(parse_weight_input),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_normalize(
        Json(answers): Json<OnboardingAnswers>,
    ) -> Result<Response, AppError> {
        Ok((StatusCode::OK, Json(transform_onboarding_data(&answers))).into_response())
    }
}
