// ABOUTME: Integration tests for the recommendation service client
// ABOUTME: Runs a local axum stub and checks request bodies, response mapping, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{http::StatusCode, routing::post, Json, Router};
use hercules_server::{
    config::MlApiConfig,
    errors::ErrorCode,
    external::{MlClient, RecommendationProvider},
    intelligence::transform_profile,
    models::{MlRequestProfile, ProfileRecord},
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_stub() -> String {
    let app = Router::new()
        .route(
            "/recommend/meals",
            post(|| async { Json(json!({"meal": {"name": "Oats"}, "extra": 1})) }),
        )
        .route(
            "/recommend/workouts",
            post(|| async { Json(json!({"workout": {"name": "Push day"}})) }),
        )
        .route(
            "/ml/recommend-meals",
            post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
        )
        .route(
            "/ml/progress-recommendations",
            post(|Json(body): Json<Value>| async move { Json(json!({ "received": body })) }),
        )
        .route(
            "/ml/generate-workout",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model offline") }),
        )
        .route("/ml/similar-users", post(|| async { "not json" }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{address}/")
}

fn client_for(base_url: &str) -> MlClient {
    MlClient::new(&MlApiConfig {
        base_url: base_url.to_owned(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    })
}

fn payload() -> MlRequestProfile {
    transform_profile(&ProfileRecord {
        username: Some("herc".into()),
        goal: Some("cut".into()),
        age: Some(28),
        weight: Some(180.0),
        height: Some(175.0),
        ..ProfileRecord::new("user-1")
    })
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let client = client_for("http://localhost:5001/api/");
    assert_eq!(client.base_url(), "http://localhost:5001/api");
}

#[tokio::test]
async fn test_combined_recommendations_pick_meal_and_workout() {
    let client = client_for(&spawn_stub().await);

    let recommendations = client.get_ai_recommendations(&payload()).await.unwrap();

    assert_eq!(recommendations.meal, Some(json!({"name": "Oats"})));
    assert_eq!(recommendations.workout, Some(json!({"name": "Push day"})));
}

#[tokio::test]
async fn test_meal_request_body_wraps_profile() {
    let client = client_for(&spawn_stub().await);

    let response = client
        .get_meal_recommendations(&payload(), "lunch", 3)
        .await
        .unwrap();

    let received = &response["received"];
    assert_eq!(received["meal_type"], "lunch");
    assert_eq!(received["n_recommendations"], 3);
    assert_eq!(received["user_profile"]["username"], "herc");
    assert_eq!(received["user_profile"]["goal"], "cut");
    assert_eq!(received["user_profile"]["weight_kg"], 180.0);
}

#[tokio::test]
async fn test_progress_data_is_forwarded() {
    let client = client_for(&spawn_stub().await);
    let progress = json!({"weights": [182.0, 181.2]});

    let response = client
        .get_progress_recommendations(&payload(), &progress)
        .await
        .unwrap();

    assert_eq!(response["received"]["progress_data"], progress);
}

#[tokio::test]
async fn test_server_error_maps_to_external_service_error() {
    let client = client_for(&spawn_stub().await);

    let error = client.generate_workout_plan(&payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("HTTP 500"));
    assert!(error.message.contains("model offline"));
}

#[tokio::test]
async fn test_non_json_body_maps_to_parse_error() {
    let client = client_for(&spawn_stub().await);

    let error = client.find_similar_users(&payload(), 5).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("JSON parse error"));
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{address}"));
    let error = client.generate_workout_plan(&payload()).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
